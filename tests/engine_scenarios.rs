//! Engine integration tests
//!
//! End-to-end scenarios through `classify`, `redact` and `process`:
//! standalone detection, combinatorial thresholds, name pairing,
//! scientific-notation normalization and record shape preservation.

use a3s_pii::{classify, process, redact, Record, NAME_COMBINATION};
use serde_json::{json, Value};

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn keys(record: &Record) -> Vec<String> {
    record.keys().cloned().collect()
}

// ─── Standalone ──────────────────────────────────────────────────

#[test]
fn test_phone_alone_is_pii() {
    let input = record(json!({"phone": "9876543210"}));
    let (out, is_pii) = process(&input);

    assert!(is_pii);
    assert_eq!(out["phone"], "98XXXXXX10");
}

#[test]
fn test_aadhar_scientific_notation() {
    let input = record(json!({"aadhar": "9.8765432101E+11"}));
    let verdict = classify(&input);
    assert!(verdict.is_pii);
    assert_eq!(verdict.fields, vec!["aadhar"]);

    let (out, _) = process(&input);
    assert_eq!(out["aadhar"], "987XXXXXX010");
}

#[test]
fn test_standalone_fields_always_pii() {
    let cases = [
        json!({"phone": 9876543210u64, "product": "Laptop"}),
        json!({"aadhar": "234567890123", "city": "Delhi"}),
        json!({"passport": "M9876543", "nationality": "IN"}),
        json!({"upi_id": "9876543210@paytm"}),
    ];
    for case in cases {
        let verdict = classify(&record(case.clone()));
        assert!(verdict.is_pii, "expected PII for {case}");
    }
}

#[test]
fn test_upi_and_passport_masks() {
    let input = record(json!({"upi_id": "rahul.sharma@okaxis", "passport": "P1234567"}));
    let (out, is_pii) = process(&input);

    // `rahul.sharma` is not a `\w+` local part, so only the passport counts
    assert!(is_pii);
    assert_eq!(out["upi_id"], "rahul.sharma@okaxis");
    assert_eq!(out["passport"], "PXXXXXX7");
}

// ─── Combinatorial ───────────────────────────────────────────────

#[test]
fn test_email_alone_is_not_pii() {
    let input = record(json!({"email": "jane.doe@example.com"}));
    let (out, is_pii) = process(&input);

    assert!(!is_pii);
    assert_eq!(out["email"], "jane.doe@example.com");
}

#[test]
fn test_name_and_email_is_pii() {
    let input = record(json!({"name": "Jane Doe", "email": "jane.doe@example.com"}));
    let verdict = classify(&input);
    assert!(verdict.is_pii);
    assert_eq!(verdict.fields, vec!["name", "email"]);

    let (out, _) = process(&input);
    assert_eq!(out["name"], "JXXX DXX");
    assert_eq!(out["email"], "jaXXXXXX@example.com");
}

#[test]
fn test_first_and_last_name_pair() {
    let input = record(json!({"first_name": "Jane", "last_name": "Doe"}));
    let verdict = classify(&input);

    // one combined element is still below the threshold
    assert!(!verdict.is_pii);

    let input = record(json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "device_id": "D-123"
    }));
    let verdict = classify(&input);
    assert!(verdict.is_pii);
    assert_eq!(verdict.fields, vec![NAME_COMBINATION, "device_id"]);

    let (out, _) = process(&input);
    assert_eq!(out["first_name"], "JXXX");
    assert_eq!(out["last_name"], "DXX");
    assert_eq!(out["device_id"], "[REDACTED_DEVICE_ID]");
}

#[test]
fn test_name_pair_redacted_via_label() {
    let input = record(json!({"first_name": "Jane", "last_name": "Doe"}));
    let out = redact(&input, &[NAME_COMBINATION.to_string()]);

    assert_eq!(out["first_name"], "JXXX");
    assert_eq!(out["last_name"], "DXX");
}

#[test]
fn test_address_alone_then_with_device() {
    let input = record(json!({"address": "12 Main St, Springfield, 123456"}));
    let (out, is_pii) = process(&input);
    assert!(!is_pii);
    assert_eq!(out, input);

    let input = record(json!({
        "address": "12 Main St, Springfield, 123456",
        "device_id": "abc"
    }));
    let (out, is_pii) = process(&input);
    assert!(is_pii);
    assert_eq!(out["address"], "XXX St, Springfield, 123456");
    assert_eq!(out["device_id"], "[REDACTED_DEVICE_ID]");
}

#[test]
fn test_every_matched_label_reported() {
    let input = record(json!({
        "name": "Asha Verma",
        "email": "asha@example.in",
        "address": "221B Baker Street, Mumbai, 400001",
        "ip_address": "10.1.2.3",
        "device_id": "android-77"
    }));
    let verdict = classify(&input);

    assert!(verdict.is_pii);
    assert_eq!(
        verdict.fields,
        vec!["name", "email", "address", "ip_address", "device_id"]
    );

    let (out, _) = process(&input);
    assert_eq!(out["name"], "AXXX VXXXX");
    assert_eq!(out["email"], "asXX@example.in");
    assert_eq!(out["address"], "XXX Street, Mumbai, 400001");
    assert_eq!(out["ip_address"], "[REDACTED_IP_ADDRESS]");
    assert_eq!(out["device_id"], "[REDACTED_DEVICE_ID]");
}

#[test]
fn test_standalone_does_not_redact_lone_combinatorial() {
    let input = record(json!({"phone": "9876543210", "email": "jane.doe@example.com"}));
    let (out, is_pii) = process(&input);

    assert!(is_pii);
    assert_eq!(out["phone"], "98XXXXXX10");
    assert_eq!(out["email"], "jane.doe@example.com");
}

// ─── Shape ───────────────────────────────────────────────────────

#[test]
fn test_redacted_record_keeps_key_set_and_order() {
    let input = record(json!({
        "customer_id": 42,
        "name": "Jane Doe",
        "phone": "9876543210",
        "email": "jane.doe@example.com",
        "vip": false,
        "notes": null
    }));
    let (out, _) = process(&input);

    assert_eq!(keys(&out), keys(&input));
    assert_eq!(out["customer_id"], 42);
    assert_eq!(out["vip"], false);
    assert_eq!(out["notes"], Value::Null);
}

#[test]
fn test_non_implicated_values_untouched() {
    let input = record(json!({
        "phone": "9876543210",
        "product": "Phone Case",
        "price": 499.5,
        "tags": ["a", "b"]
    }));
    let (out, _) = process(&input);

    for key in ["product", "price", "tags"] {
        assert_eq!(out[key], input[key], "{key} changed");
    }
}

#[test]
fn test_parallel_processing_is_consistent() {
    let input = record(json!({"name": "Jane Doe", "email": "jane.doe@example.com"}));
    let expected = process(&input);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let input = input.clone();
            std::thread::spawn(move || process(&input))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
