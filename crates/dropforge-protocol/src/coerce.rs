//! Lenient conversions for values submitted by loosely-typed clients.
//!
//! Stat forms post whatever the player typed, so numbers may arrive as
//! strings, `null`, or garbage. Everything that cannot be read as a finite
//! number collapses to `0.0`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Returns `n` when finite, otherwise `0.0`.
#[inline]
pub fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Converts an arbitrary JSON value to a finite number.
///
/// Strings are trimmed and parsed (an empty string is `0`), booleans map
/// to `1`/`0`, and everything else is `0`. Numbers beyond the `f64` range,
/// such as `1e400`, are kept as text by the parser and also end up `0`.
pub fn number_from_value(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_number(s),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    finite_or_zero(n)
}

/// Parses a user-typed number. Unparsable text becomes `0.0`.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Parses a filter threshold typed into a form, accepting a comma as the
/// decimal separator. Blank or unparsable input yields `None`.
pub fn parse_threshold(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

/// Reads any scalar as text; `null` becomes `None`.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    })
}

/// Distinguishes an explicit `null` from an absent field.
///
/// Use together with `#[serde(default)]`: a missing field stays `None`,
/// `null` becomes `Some(None)` and a value becomes `Some(Some(v))`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Trims `raw`, returning `None` when nothing is left.
pub fn non_empty_trimmed(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
