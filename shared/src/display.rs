//! Formatting helpers for card text.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%-d %B %Y";

/// Renders a server timestamp as e.g. `5 October 2022`.
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, RFC 3339 and plain `YYYY-MM-DD`; anything
/// else is returned trimmed but otherwise as sent.
pub fn format_published(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return ts.format(DATE_FORMAT).to_string();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format(DATE_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DATE_FORMAT).to_string();
    }
    raw.to_string()
}
