//! Value coercion with raw-string fallback.
//!
//! Real-world remittances carry malformed numbers and dates; coercion never
//! fails a document. Numeric fields parse to JSON numbers when possible and
//! keep the original string otherwise; dates in the recognized numeric
//! patterns become ISO-8601 strings.

use chrono::{NaiveDate, NaiveTime};
use serde_json::Value as Json;

/// Parse a monetary or quantity element to a JSON number, keeping the raw
/// string on non-numeric input.
#[must_use]
pub fn money(raw: &str) -> Json {
    match raw.trim().parse::<f64>() {
        Ok(n) => serde_json::Number::from_f64(n)
            .map_or_else(|| Json::String(raw.to_string()), Json::Number),
        Err(_) => {
            tracing::trace!(raw, "non-numeric amount, keeping raw value");
            Json::String(raw.to_string())
        }
    }
}

/// Parse an integer element, keeping the raw string on non-numeric input.
#[must_use]
pub fn integer(raw: &str) -> Json {
    raw.trim()
        .parse::<i64>()
        .map_or_else(|_| Json::String(raw.to_string()), Json::from)
}

/// Parse CCYYMMDD or YYMMDD into an ISO-8601 date.
#[must_use]
pub fn date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let parsed = match raw.len() {
        8 => NaiveDate::parse_from_str(raw, "%Y%m%d").ok(),
        6 => NaiveDate::parse_from_str(raw, "%y%m%d").ok(),
        _ => None,
    };
    parsed.map(|d| d.format("%Y-%m-%d").to_string())
}

/// Parse HHMM or HHMMSS into an ISO-8601 time.
#[must_use]
pub fn time(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let parsed = match raw.len() {
        4 => NaiveTime::parse_from_str(raw, "%H%M").ok(),
        6 | 8 => NaiveTime::parse_from_str(raw, "%H%M%S").ok(),
        _ => None,
    };
    parsed.map(|t| t.format("%H:%M:%S").to_string())
}

/// Date as a JSON value, falling back to the raw string when the pattern is
/// not recognized.
#[must_use]
pub fn date_value(raw: &str) -> Json {
    date(raw).map_or_else(|| Json::String(raw.to_string()), Json::String)
}

/// Time as a JSON value with raw fallback.
#[must_use]
pub fn time_value(raw: &str) -> Json {
    time(raw).map_or_else(|| Json::String(raw.to_string()), Json::String)
}

/// Expand an RD8 date range (`CCYYMMDD-CCYYMMDD`) into start/end dates.
#[must_use]
pub fn date_range(raw: &str) -> Option<(String, String)> {
    let (start, end) = raw.trim().split_once('-')?;
    Some((date(start)?, date(end)?))
}
