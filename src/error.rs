//! Error types for a3s-pii
//!
//! The detection engine itself never fails. These errors only surface from
//! the batch layer, which touches files, CSV and JSON.

use thiserror::Error;

/// Errors that can occur while running a batch
#[derive(Debug, Error)]
pub enum PiiError {
    /// Filesystem failure opening input or output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read or write failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configured column is not present in the input header
    #[error("Column '{column}' not found in input header")]
    MissingColumn { column: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for batch operations
pub type Result<T> = std::result::Result<T, PiiError>;
