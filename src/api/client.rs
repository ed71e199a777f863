//! API client for the CCC points list endpoints.
//!
//! This module provides the `ApiClient` struct for issuing GET requests
//! against apps.cccski.com and returning the buffered response body as JSON.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::ApiError;

/// Base URL for the points list endpoints.
/// The upstream only serves plaintext HTTP.
const DEFAULT_BASE_URL: &str = "http://apps.cccski.com";

/// API client for apps.cccski.com.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the production host.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom host.
    /// Tests use this to point at a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        // No explicit timeout or redirect policy; transport defaults apply.
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Issue a GET for `path` (query string included) and return the response
    /// body as JSON.
    ///
    /// The body is buffered whole and parsed best-effort: a payload that is
    /// not valid JSON does not fail the fetch, it is carried through as a raw
    /// string value. A status of 300 or above fails with [`ApiError::Remote`]
    /// holding the status, its reason phrase, and the (possibly unparsed)
    /// body. Connection-level failures surface as [`ApiError::Transport`].
    pub async fn get_value(&self, path: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "fetching");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        // parse response, assuming JSON format; keep the raw text otherwise
        let body = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) => Value::String(text),
        };

        if status.as_u16() >= 300 {
            warn!(url = %url, status = status.as_u16(), "upstream returned non-success status");
            return Err(ApiError::remote(status, body));
        }

        Ok(body)
    }
}
