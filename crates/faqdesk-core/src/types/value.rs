//! Helpers for loosely typed values.
//!
//! Option records and filter values arrive as JSON. These helpers give them
//! the emptiness and integer coercion rules the host platform applies to
//! its own loosely typed settings.

use serde_json::Value;

/// Returns whether a value counts as empty.
///
/// Empty values are `null`, `false`, `0`, `0.0`, `""`, `"0"`, and empty
/// arrays or objects.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Returns whether a value counts as set.
pub fn is_truthy(value: &Value) -> bool {
    !is_blank(value)
}

/// Coerce a string to a non-negative integer.
///
/// Leading whitespace is skipped, an optional sign and the leading digits
/// are read, and the absolute value is returned. Input without leading
/// digits yields `0`.
pub fn absint(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<u64>().unwrap_or(0)
}

/// Coerce a JSON value to a non-negative integer.
pub fn absint_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(i64::unsigned_abs)
            .or_else(|| n.as_u64())
            .or_else(|| n.as_f64().map(|f| f.abs().trunc() as u64))
            .unwrap_or(0),
        Value::String(s) => absint(s),
        Value::Bool(true) => 1,
        _ => 0,
    }
}
