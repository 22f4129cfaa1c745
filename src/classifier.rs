//! Record classifier
//!
//! Two independent passes over the record:
//! - **standalone**: one validated phone, aadhar, passport or UPI id is
//!   enough to mark the record as PII
//! - **combinatorial**: name, email, address, ip address, device id and the
//!   first/last name pair are weak evidence; at least
//!   [`COMBINATION_THRESHOLD`] of them must co-occur

use crate::patterns::{is_truthy, validate};
use crate::types::{FieldKind, Record, Verdict, NAME_COMBINATION};

/// Minimum number of combinatorial elements that constitutes PII
pub const COMBINATION_THRESHOLD: usize = 2;

/// Classify a record, returning the verdict and implicated field labels
pub fn classify(record: &Record) -> Verdict {
    let mut fields = standalone_matches(record);
    let standalone = !fields.is_empty();

    let combination = combinatorial_matches(record);
    let combined = combination.len() >= COMBINATION_THRESHOLD;
    if combined {
        fields.extend(combination);
    }

    tracing::trace!(standalone, combined, fields = ?fields, "Classified record");

    Verdict {
        is_pii: standalone || combined,
        fields,
    }
}

/// Names of standalone fields whose values validate, in record order
pub fn standalone_matches(record: &Record) -> Vec<String> {
    record
        .iter()
        .filter(|(key, value)| {
            let kind = FieldKind::from_name(key);
            kind.is_standalone() && validate(kind, value)
        })
        .map(|(key, _)| key.clone())
        .collect()
}

/// Labels of validated combinatorial elements, in record order
///
/// `first_name` and `last_name` together contribute a single
/// `name_combination` label, whichever of the two is visited first.
pub fn combinatorial_matches(record: &Record) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();

    for (key, value) in record {
        match FieldKind::from_name(key) {
            kind @ (FieldKind::Name
            | FieldKind::Email
            | FieldKind::Address
            | FieldKind::IpAddress
            | FieldKind::DeviceId) => {
                if validate(kind, value) {
                    labels.push(key.clone());
                }
            }
            FieldKind::FirstName | FieldKind::LastName => {
                if has_name_pair(record) && !labels.iter().any(|l| l == NAME_COMBINATION) {
                    labels.push(NAME_COMBINATION.to_string());
                }
            }
            _ => {}
        }
    }

    labels
}

/// Both `first_name` and `last_name` are present and non-empty
fn has_name_pair(record: &Record) -> bool {
    let present = |field: &str| record.get(field).map_or(false, is_truthy);
    present("first_name") && present("last_name")
}
