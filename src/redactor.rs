//! Field-aware redaction
//!
//! Masks keep enough structure (length, delimiters, domains) for a value to
//! stay recognizable as its kind. Redaction is total: a patterned value that
//! no longer validates for its kind is returned as its own string form, and
//! a mask that cannot find its delimiters uses a fixed placeholder.

use crate::patterns::{coerce, normalized_digits, validate};
use crate::types::{is_implicated, FieldKind, Record};
use serde_json::Value;

const MASK_CHAR: char = 'X';

/// Produce a copy of `record` with every implicated field masked
///
/// Keys and their order are preserved. Fields not in `implicated` (and
/// `first_name`/`last_name` when `name_combination` is absent) are copied
/// unchanged, including their JSON type.
pub fn redact(record: &Record, implicated: &[String]) -> Record {
    record
        .iter()
        .map(|(key, value)| {
            let out = if is_implicated(key, implicated) {
                Value::String(mask(FieldKind::from_name(key), value))
            } else {
                value.clone()
            };
            (key.clone(), out)
        })
        .collect()
}

/// Mask a single value according to its field kind
///
/// Phone, aadhar, passport, UPI, email, name and address values are
/// re-validated first and left as their string form when they do not match.
/// The remaining kinds are masked unconditionally.
pub fn mask(kind: FieldKind, value: &Value) -> String {
    if requires_validation(kind) && !validate(kind, value) {
        return stringify(value);
    }

    match kind {
        FieldKind::Phone => {
            let digits = normalized_digits(value).unwrap_or_else(|| stringify(value));
            keep_ends(&digits, 2, 6)
        }
        FieldKind::Aadhar => {
            let digits = normalized_digits(value).unwrap_or_else(|| stringify(value));
            keep_ends(&digits, 3, 6)
        }
        FieldKind::Passport => mask_passport(&stringify(value)),
        FieldKind::Upi => mask_upi(&stringify(value)),
        FieldKind::Email => mask_email(&stringify(value)),
        FieldKind::Name => stringify(value)
            .split_whitespace()
            .map(mask_word)
            .collect::<Vec<_>>()
            .join(" "),
        FieldKind::FirstName | FieldKind::LastName => mask_word(&stringify(value)),
        FieldKind::Address => mask_address(&stringify(value)),
        FieldKind::IpAddress => "[REDACTED_IP_ADDRESS]".to_string(),
        FieldKind::DeviceId => "[REDACTED_DEVICE_ID]".to_string(),
        FieldKind::Other => stringify(value),
    }
}

fn requires_validation(kind: FieldKind) -> bool {
    matches!(
        kind,
        FieldKind::Phone
            | FieldKind::Aadhar
            | FieldKind::Passport
            | FieldKind::Upi
            | FieldKind::Email
            | FieldKind::Name
            | FieldKind::Address
    )
}

/// String form used for masking; non-scalars fall back to their JSON text
fn stringify(value: &Value) -> String {
    coerce(value).unwrap_or_else(|| value.to_string())
}

fn repeat_mask(n: usize) -> String {
    std::iter::repeat(MASK_CHAR).take(n).collect()
}

fn first_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fn last_chars(s: &str, n: usize) -> String {
    let len = s.chars().count();
    s.chars().skip(len.saturating_sub(n)).collect()
}

/// `head` leading chars, `fill` mask chars, `head` trailing chars
fn keep_ends(s: &str, head: usize, fill: usize) -> String {
    format!(
        "{}{}{}",
        first_chars(s, head),
        repeat_mask(fill),
        last_chars(s, head)
    )
}

/// First letter kept, the rest masked; anything of length ≤ 1 becomes `X`
fn mask_word(word: &str) -> String {
    let len = word.chars().count();
    if len <= 1 {
        return MASK_CHAR.to_string();
    }
    format!("{}{}", first_chars(word, 1), repeat_mask(len - 1))
}

fn mask_passport(s: &str) -> String {
    let len = s.chars().count();
    if len < 2 {
        return MASK_CHAR.to_string();
    }
    format!(
        "{}{}{}",
        first_chars(s, 1),
        repeat_mask(len - 2),
        last_chars(s, 1)
    )
}

fn mask_local_part(local: &str) -> String {
    let len = local.chars().count();
    format!("{}{}", first_chars(local, 2), repeat_mask(len.saturating_sub(2)))
}

fn mask_upi(s: &str) -> String {
    match s.split_once('@') {
        Some((local, domain)) => format!("{}@{}", mask_local_part(local), domain),
        None => "REDACTED_UPI".to_string(),
    }
}

/// Local part masked, followed by the segment up to the next `@`
fn mask_email(s: &str) -> String {
    let mut segments = s.split('@');
    match (segments.next(), segments.next()) {
        (Some(local), Some(domain)) => {
            let masked = if local.chars().count() > 2 {
                mask_local_part(local)
            } else {
                "XX".to_string()
            };
            format!("{}@{}", masked, domain)
        }
        _ => s.to_string(),
    }
}

fn mask_address(s: &str) -> String {
    let mut parts: Vec<String> = s.split(',').map(str::to_string).collect();
    if parts.len() < 3 {
        return "[REDACTED_ADDRESS]".to_string();
    }

    let head = &parts[0];
    let masked_head = match head.split_whitespace().last() {
        Some(last) if head.contains(' ') => format!("XXX {}", last),
        _ => "XXX".to_string(),
    };
    parts[0] = masked_head;
    parts.join(",")
}
