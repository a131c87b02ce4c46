//! Date helpers for backend timestamps.
//!
//! The backend sends dates either as `YYYY-MM-DD` or as RFC 3339 timestamps.
//! Timestamps keep the calendar date of their own offset.

use chrono::{DateTime, NaiveDate};

const DATE_ONLY: &str = "%Y-%m-%d";

fn parse(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, DATE_ONLY).ok())
}

/// Normalises a backend date to the `YYYY-MM-DD` form a date input expects.
/// Missing or unparseable values become an empty string.
pub fn date_only(raw: Option<&str>) -> String {
    raw.and_then(parse)
        .map(|date| date.format(DATE_ONLY).to_string())
        .unwrap_or_default()
}

/// Long form used in the detail panel, e.g. `January 5, 2024`.
pub fn format_long(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => "N/A".to_string(),
        Some(value) => parse(value)
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| value.to_string()),
    }
}
