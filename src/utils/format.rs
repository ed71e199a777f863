use chrono::NaiveDate;

use crate::api::ApiError;

/// Date layout used by the upstream API, e.g. `Jan 5, 2024`
const UPSTREAM_DATE_FORMAT: &str = "%b %d, %Y";

/// Reformat an upstream `MMM D, YYYY` date string to `YYYY-MM-DD`.
///
/// The upstream sometimes embeds literal `&nbsp;` entities in place of
/// spaces; those are cleaned up before parsing. A cleaned string that still
/// does not match the expected layout is an error - bad dates are surfaced,
/// not masked.
pub fn reformat_date(raw: &str) -> Result<String, ApiError> {
    let cleaned = raw.replace("&nbsp;", " ");
    let date = NaiveDate::parse_from_str(cleaned.trim(), UPSTREAM_DATE_FORMAT)
        .map_err(|_| ApiError::DateFormat(raw.to_string()))?;
    Ok(date.format("%Y-%m-%d").to_string())
}
