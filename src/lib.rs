//! # a3s-pii
//!
//! Record-level PII classification and field-aware redaction for the A3S
//! ecosystem.
//!
//! ## Overview
//!
//! `a3s-pii` takes flat key/value records (JSON objects), decides whether
//! each one contains Personally Identifiable Information, and produces a
//! masked copy that is safe to store or share.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_pii::{process, Record};
//!
//! let record: Record = serde_json::from_str(
//!     r#"{"name": "Jane Doe", "email": "jane.doe@example.com", "city": "Pune"}"#,
//! ).unwrap();
//!
//! let (redacted, is_pii) = process(&record);
//! assert!(is_pii);
//! assert_eq!(redacted["name"], "JXXX DXX");
//! assert_eq!(redacted["city"], "Pune");
//! ```
//!
//! ## Detection rules
//!
//! - **Standalone**: a validated `phone`, `aadhar`, `passport` or `upi_id`
//!   marks the record as PII on its own
//! - **Combinatorial**: `name`, `email`, `address`, `ip_address`,
//!   `device_id` and the `first_name`+`last_name` pair only count when two or
//!   more co-occur
//!
//! ## Architecture
//!
//! - **classifier**: `classify(record) -> Verdict`
//! - **redactor**: `redact(record, fields) -> Record`
//! - **engine**: `process` / `inspect`, classify then redact
//! - **batch**: CSV runner with per-row degradation and a run summary
//!
//! All core functions are pure. The pattern table is compiled once and
//! shared read-only, so records can be processed from any number of threads.

pub mod batch;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod patterns;
pub mod redactor;
pub mod types;

// Re-export core types
pub use batch::{process_csv, process_row, run, BatchConfig, BatchSummary, ProcessedRow};
pub use classifier::{classify, COMBINATION_THRESHOLD};
pub use engine::{inspect, process, Processed};
pub use error::{PiiError, Result};
pub use redactor::{mask, redact};
pub use types::{FieldKind, Record, Verdict, NAME_COMBINATION};
