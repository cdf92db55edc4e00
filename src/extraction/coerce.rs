//! Positional access and scalar coercion over `serde_json::Value`.
//!
//! The recorder nests data positionally: an event's source is
//! `[sourceId, weapon, ...]` and a position sample is `[[x, y, z], ...]`.
//! In both the leading element is the one that matters.

use serde_json::Value;

/// First element of an array value.
///
/// # Examples
/// ```
/// use ocap_stats_core::extraction::leading_element;
/// use serde_json::json;
/// assert_eq!(leading_element(&json!([7, "MX 6.5 mm"])), Some(&json!(7)));
/// assert_eq!(leading_element(&json!(7)), None);
/// ```
pub fn leading_element(value: &Value) -> Option<&Value> {
    value.as_array()?.first()
}

/// Positional field of a record, treating JSON `null` the same as absent.
pub fn present_field(record: &[Value], index: usize) -> Option<&Value> {
    record.get(index).filter(|v| !v.is_null())
}

/// Scalar as display text. Containers and `null` have no text form.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Convert a JSON value to a float if possible.
pub fn value_to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Convert a JSON value to an integer id if possible.
///
/// Whole-valued floats (`7.0`) are accepted since some exporters write every
/// number as a double.
pub fn value_to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Convert a JSON value to a boolean if possible.
pub fn value_to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => parse_flag(s),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        _ => None,
    }
}

/// Parse a textual flag (`true/1/yes`, `false/0/no`), case-insensitive.
pub fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
