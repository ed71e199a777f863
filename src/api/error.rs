use serde_json::Value;
use thiserror::Error;

/// Maximum length for response bodies rendered into error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection-level failure; no HTTP response was obtained.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a status of 300 or above.
    #[error("Remote error: {status} {message}: {}", truncate_body(.body))]
    Remote {
        status: u16,
        message: String,
        body: Value,
    },

    /// A successful fetch whose payload did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// An upstream date string that does not match the `MMM D, YYYY` layout.
    #[error("Unrecognized date format: {0:?}")]
    DateFormat(String),
}

impl ApiError {
    pub(crate) fn remote(status: reqwest::StatusCode, body: Value) -> Self {
        ApiError::Remote {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("").to_string(),
            body,
        }
    }
}

/// Truncate a response body to avoid dumping excessive data into messages
fn truncate_body(body: &Value) -> String {
    let text = body.to_string();
    if text.len() <= MAX_ERROR_BODY_LENGTH {
        text
    } else {
        let truncated: String = text.chars().take(MAX_ERROR_BODY_LENGTH).collect();
        format!("{}... (truncated, {} total bytes)", truncated, text.len())
    }
}
