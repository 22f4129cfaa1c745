//! Validation patterns and value coercion
//!
//! The regex table is compiled once and shared read-only for the life of
//! the process. Validation never fails: a value that cannot be coerced or
//! normalized simply does not match.

use crate::types::FieldKind;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Per-kind validation patterns, compiled once and cached
fn pattern_table() -> &'static [(FieldKind, Regex)] {
    static PATTERNS: OnceLock<Vec<(FieldKind, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let raw = vec![
            (FieldKind::Phone, r"^\d{10}$"),
            (FieldKind::Aadhar, r"^\d{12}$"),
            (FieldKind::Passport, r"^[A-Z]\d{7}$"),
            (FieldKind::Upi, r"^(?:\w+@\w+|\d{10}@\w+)$"),
            (
                FieldKind::Email,
                r"^\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b$",
            ),
            (FieldKind::Name, r"^[A-Z][a-z]+ [A-Z][a-z]+(?:\s[A-Z][a-z]+)*$"),
            // Unanchored: two comma-separated segments then a 6-digit postal code
            (FieldKind::Address, r".+,\s*.+,\s*\d{6}"),
        ];

        raw.into_iter()
            .filter_map(|(kind, pattern)| Regex::new(pattern).ok().map(|r| (kind, r)))
            .collect()
    })
}

fn pattern(kind: FieldKind) -> Option<&'static Regex> {
    pattern_table()
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, regex)| regex)
}

/// String form of a scalar value
///
/// Numbers keep their JSON text and booleans render as `True`/`False`.
/// `null`, arrays and objects have no scalar form.
pub fn coerce(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Expand scientific notation (`9.8765E+9`) into a plain digit string
///
/// Strings without an `e+`/`E+` exponent pass through untouched. Returns
/// `None` when the exponent form does not parse to a finite number.
pub fn normalize_numeric(raw: &str) -> Option<String> {
    if !(raw.contains("e+") || raw.contains("E+")) {
        return Some(raw.to_string());
    }
    let parsed: f64 = raw.trim().parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(format!("{:.0}", parsed))
}

/// Scalar form of a phone/aadhar value after numeric normalization
pub fn normalized_digits(value: &Value) -> Option<String> {
    coerce(value).and_then(|s| normalize_numeric(&s))
}

/// Truthiness of a JSON value: `null`, `false`, zero and empty containers are false
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Whether `value` is a well-formed instance of `kind`
///
/// `IpAddress` and `DeviceId` have no format and validate on truthiness.
/// `FirstName`, `LastName` and `Other` carry no pattern.
pub fn validate(kind: FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::IpAddress | FieldKind::DeviceId => is_truthy(value),
        FieldKind::Phone | FieldKind::Aadhar => match normalized_digits(value) {
            Some(digits) => matches_pattern(kind, &digits),
            None => false,
        },
        FieldKind::Passport
        | FieldKind::Upi
        | FieldKind::Email
        | FieldKind::Name
        | FieldKind::Address => match coerce(value) {
            Some(text) => matches_pattern(kind, &text),
            None => false,
        },
        FieldKind::FirstName | FieldKind::LastName | FieldKind::Other => false,
    }
}

fn matches_pattern(kind: FieldKind, text: &str) -> bool {
    pattern(kind).map_or(false, |regex| regex.is_match(text))
}
