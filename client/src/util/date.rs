//! Human-readable dates for profile fields.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, NaiveDate};

const DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Format an account timestamp as e.g. `March 5, 2024`.
///
/// Accepts RFC 3339 text, a bare `YYYY-MM-DD` date, or epoch milliseconds.
/// Returns `None` for anything else so the caller can omit the line.
pub fn format_joined(value: &serde_json::Value) -> Option<String> {
    let date = match value {
        serde_json::Value::String(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()?,
        serde_json::Value::Number(n) => DateTime::from_timestamp_millis(n.as_i64()?)?.date_naive(),
        _ => return None,
    };
    Some(date.format(DISPLAY_FORMAT).to_string())
}
