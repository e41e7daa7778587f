//! Loose value checks.
//!
//! The billing host hands over configuration as untyped values and the
//! processor is not strict about JSON types either (ids and amounts arrive
//! as numbers or strings). These helpers pin down how such values are read.

use serde_json::Value;

/// True for values a scripting host treats as false:
/// `null`, `false`, `0`, `0.0`, `""`, `"0"` and empty arrays/objects.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// True when a scripting host's `value == 0` holds: `null`, `false`, zero
/// numbers and numeric strings that read as zero (`"0.0"`, `"00"`, `" 0"`).
/// Non-numeric strings, `""` included, compare unequal.
pub fn equals_zero(value: &Value) -> bool {
    match value {
        Value::String(s) => {
            let trimmed = s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'));
            is_numeric(trimmed) && trimmed.parse::<f64>().map(|f| f == 0.0).unwrap_or(false)
        }
        Value::Array(_) | Value::Object(_) => false,
        other => is_empty(other),
    }
}

/// Decimal number syntax a scripting host accepts: optional sign, digits
/// with an optional fraction, optional exponent. No `inf`/`nan`.
fn is_numeric(s: &str) -> bool {
    let s = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let (mantissa, exponent) = match s.find(&['e', 'E'][..]) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());

    let mantissa_ok = !(int.is_empty() && frac.is_empty()) && digits(int) && digits(frac);
    let exponent_ok = exponent.map_or(true, |e| {
        let e = e.strip_prefix(&['+', '-'][..]).unwrap_or(e);
        !e.is_empty() && digits(e)
    });
    mantissa_ok && exponent_ok
}

/// Look up `key` in a JSON object and return it only when non-empty.
pub fn non_empty<'a>(object: &'a Value, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|v| !is_empty(v))
}

/// Render a scalar as a string: strings verbatim, numbers and bools in
/// their JSON form. Compound values are rendered as compact JSON.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Read a number that may have been sent as a numeric string.
pub fn to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
