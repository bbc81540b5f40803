//! Field coercion helpers
//!
//! The provider encodes the same concept differently depending on panel
//! version and endpoint: numbers arrive as strings, booleans as `0/1` or
//! `"0"/"1"`, lists as comma separated strings and EPG text as base64.
//! Every helper here is total: bad input becomes `None` (or an empty list).

use base64::{engine::general_purpose, Engine};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::Value;
use tracing::warn;

/// Convert epoch seconds (number or numeric string) to a timestamp
pub fn to_epoch_date(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let seconds = to_integer(value)?;
    let millis = seconds.checked_mul(1000)?;
    Utc.timestamp_millis_opt(millis).single()
}

/// Same as [`to_epoch_date`] for fields already decoded as text
pub fn epoch_str_to_date(value: Option<&str>) -> Option<DateTime<Utc>> {
    let seconds: i64 = value?.trim().parse().ok()?;
    Utc.timestamp_millis_opt(seconds.checked_mul(1000)?).single()
}

/// Parse a provider date string
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD`. Strings without
/// an offset are taken as UTC.
pub fn to_date(value: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// `true` iff the value is `1` or `"1"` (or a JSON `true`)
pub fn to_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() == Some(1.0),
        Some(Value::String(s)) => s.trim() == "1",
        _ => false,
    }
}

/// Split a comma separated list, trimming each element
///
/// Absent and empty input give an empty list. Interior empty tokens are kept.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    match value {
        Some(s) if !s.trim().is_empty() => s.split(',').map(|x| x.trim().to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Decode base64 transport text to UTF-8
///
/// Invalid base64 is returned unchanged; invalid UTF-8 is replaced lossily.
pub fn decode_base64_text(value: &str) -> String {
    let trimmed = value.trim();
    let decoded = general_purpose::STANDARD
        .decode(trimmed)
        .or_else(|_| general_purpose::STANDARD_NO_PAD.decode(trimmed.trim_end_matches('=')));

    match decoded {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!("EPG text is not valid base64, keeping it as is: {}", e);
            value.to_string()
        }
    }
}

/// Numeric coercion from a number or a numeric string
pub fn to_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Integral coercion; fractional values are truncated
pub fn to_integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        _ => None,
    }
}

/// Render an id-like value (number or string) as a string
pub fn to_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Drop empty strings, the provider's usual way of saying "unknown"
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
