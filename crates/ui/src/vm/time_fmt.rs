use chrono::{DateTime, NaiveDate, NaiveDateTime};
use hub_core::time::SERVER_TIMESTAMP_FORMAT;

/// Render a server timestamp as a calendar date (`YYYY-MM-DD`).
///
/// Accepts the API layout, RFC 3339, or a bare date. Anything else is shown
/// as delivered.
#[must_use]
pub fn format_created_at(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDateTime::parse_from_str(raw, SERVER_TIMESTAMP_FORMAT)
        .map(|value| value.date())
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|value| value.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_owned(),
    }
}
