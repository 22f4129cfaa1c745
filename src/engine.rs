//! Classify-then-redact in one call

use crate::classifier::classify;
use crate::redactor::redact;
use crate::types::{Record, Verdict};

/// A redacted record together with the verdict that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    /// Record with implicated fields masked
    pub record: Record,

    /// Classification outcome
    pub verdict: Verdict,
}

/// Classify a record and redact it, keeping the full verdict
pub fn inspect(record: &Record) -> Processed {
    let verdict = classify(record);
    let redacted = redact(record, &verdict.fields);

    tracing::debug!(
        is_pii = verdict.is_pii,
        fields = ?verdict.fields,
        "Processed record"
    );

    Processed {
        record: redacted,
        verdict,
    }
}

/// Classify a record and redact it, returning `(redacted, is_pii)`
pub fn process(record: &Record) -> (Record, bool) {
    let Processed { record, verdict } = inspect(record);
    (record, verdict.is_pii)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_process_non_pii_is_identity() {
        let record = match json!({"email": "jane.doe@example.com", "city": "Pune"}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let (out, is_pii) = process(&record);
        assert!(!is_pii);
        assert_eq!(out, record);
    }

    #[test]
    fn test_inspect_keeps_verdict() {
        let record = match json!({"passport": "K7654321", "notes": "n/a"}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        let processed = inspect(&record);
        assert!(processed.verdict.is_pii);
        assert_eq!(processed.verdict.fields, vec!["passport"]);
        assert_eq!(processed.record["passport"], json!("KXXXXXX1"));
        assert_eq!(processed.record["notes"], json!("n/a"));
    }
}
