//! CSV batch runner
//!
//! Reads rows of `(record id, JSON object)` from a CSV file, runs each
//! record through the engine and writes `(record id, redacted JSON, flag)`
//! rows. A cell that is not a JSON object degrades that single row: the
//! original cell is passed through and the flag is `False`. Such a row never
//! halts the batch.

use crate::engine::inspect;
use crate::error::{PiiError, Result};
use crate::types::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

/// Batch runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    /// Input CSV path
    pub input: PathBuf,

    /// Output CSV path
    pub output: PathBuf,

    /// Column holding the record identifier
    #[serde(default = "default_id_column")]
    pub id_column: String,

    /// Column holding the record as a JSON object
    #[serde(default = "default_data_column")]
    pub data_column: String,

    /// Output column for the redacted JSON
    #[serde(default = "default_output_data_column")]
    pub output_data_column: String,

    /// Output column for the PII flag
    #[serde(default = "default_output_flag_column")]
    pub output_flag_column: String,
}

fn default_id_column() -> String {
    "record_id".to_string()
}

fn default_data_column() -> String {
    "data_json".to_string()
}

fn default_output_data_column() -> String {
    "redacted_data_json".to_string()
}

fn default_output_flag_column() -> String {
    "is_pii".to_string()
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.csv"),
            output: PathBuf::from("redacted_output.csv"),
            id_column: default_id_column(),
            data_column: default_data_column(),
            output_data_column: default_output_data_column(),
            output_flag_column: default_output_flag_column(),
        }
    }
}

impl BatchConfig {
    /// Create a config for the given paths with default column names
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Default::default()
        }
    }

    /// Reject empty column names and output paths that would clobber the input
    pub fn validate(&self) -> Result<()> {
        for (name, column) in [
            ("id_column", &self.id_column),
            ("data_column", &self.data_column),
            ("output_data_column", &self.output_data_column),
            ("output_flag_column", &self.output_flag_column),
        ] {
            if column.trim().is_empty() {
                return Err(PiiError::Config(format!("{} must not be empty", name)));
            }
        }
        if self.input == self.output {
            return Err(PiiError::Config(format!(
                "output path '{}' is the same as the input",
                self.output.display()
            )));
        }
        Ok(())
    }
}

/// Result of processing one input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedRow {
    /// Record identifier, passed through
    pub record_id: String,

    /// Redacted record as JSON, or the original cell when degraded
    pub data_json: String,

    /// Whether the record contains PII
    pub is_pii: bool,

    /// The cell could not be parsed as a JSON object
    pub degraded: bool,
}

impl ProcessedRow {
    fn degraded(record_id: &str, data_json: &str) -> Self {
        Self {
            record_id: record_id.to_string(),
            data_json: data_json.to_string(),
            is_pii: false,
            degraded: true,
        }
    }
}

/// Process a single row: parse, classify, redact, re-serialize
pub fn process_row(record_id: &str, data_json: &str) -> ProcessedRow {
    let record: Record = match serde_json::from_str(data_json) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(record_id, error = %e, "Failed to parse record JSON, passing through");
            return ProcessedRow::degraded(record_id, data_json);
        }
    };

    let processed = inspect(&record);
    match serde_json::to_string(&processed.record) {
        Ok(json) => ProcessedRow {
            record_id: record_id.to_string(),
            data_json: json,
            is_pii: processed.verdict.is_pii,
            degraded: false,
        },
        Err(e) => {
            tracing::warn!(record_id, error = %e, "Failed to serialize redacted record");
            ProcessedRow::degraded(record_id, data_json)
        }
    }
}

/// Counters and timing for one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    /// Unique run identifier (run-<uuid>)
    pub run_id: String,

    pub started_at: DateTime<Utc>,

    pub finished_at: DateTime<Utc>,

    /// Rows processed
    pub total: usize,

    /// Rows flagged as PII
    pub pii: usize,

    /// Rows passed through because their cell was not valid UTF-8 or JSON
    pub degraded: usize,
}

impl BatchSummary {
    fn start() -> Self {
        let now = Utc::now();
        Self {
            run_id: format!("run-{}", uuid::Uuid::new_v4()),
            started_at: now,
            finished_at: now,
            total: 0,
            pii: 0,
            degraded: 0,
        }
    }

    fn record(&mut self, row: &ProcessedRow) {
        self.total += 1;
        if row.is_pii {
            self.pii += 1;
        }
        if row.degraded {
            self.degraded += 1;
        }
    }

    /// Pretty-printed JSON form of the summary
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fraction of rows flagged as PII (0.0 for an empty batch)
    pub fn pii_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.pii as f64 / self.total as f64
        }
    }
}

fn flag(is_pii: bool) -> &'static str {
    if is_pii {
        "True"
    } else {
        "False"
    }
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| PiiError::MissingColumn {
            column: column.to_string(),
        })
}

/// Process CSV from `input` into `output` using the columns in `config`
///
/// Paths in `config` are ignored; see [`run`] for the file-based entry point.
pub fn process_csv<R: io::Read, W: io::Write>(
    input: R,
    output: W,
    config: &BatchConfig,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::start();

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader.headers()?.clone();
    let id_idx = column_index(&headers, &config.id_column)?;
    let data_idx = column_index(&headers, &config.data_column)?;

    let mut writer = csv::Writer::from_writer(output);
    writer.write_record([
        config.id_column.as_str(),
        config.output_data_column.as_str(),
        config.output_flag_column.as_str(),
    ])?;

    let mut row = csv::ByteRecord::new();
    while reader.read_byte_record(&mut row)? {
        let record_id = row.get(id_idx).unwrap_or_default();
        let data_json = row.get(data_idx).unwrap_or_default();

        let (id_text, data_text) =
            match (std::str::from_utf8(record_id), std::str::from_utf8(data_json)) {
                (Ok(id), Ok(data)) => (id, data),
                _ => {
                    // Pass the raw bytes through so the cell is not altered
                    let lossy_id = String::from_utf8_lossy(record_id);
                    tracing::warn!(record_id = %lossy_id, "Row is not valid UTF-8, passing through");
                    writer.write_record([record_id, data_json, flag(false).as_bytes()])?;
                    summary.record(&ProcessedRow::degraded(
                        &lossy_id,
                        &String::from_utf8_lossy(data_json),
                    ));
                    continue;
                }
            };

        let processed = process_row(id_text, data_text);
        writer.write_record([
            processed.record_id.as_str(),
            processed.data_json.as_str(),
            flag(processed.is_pii),
        ])?;
        summary.record(&processed);
    }

    writer.flush()?;
    summary.finished_at = Utc::now();
    Ok(summary)
}

/// Run a batch from `config.input` to `config.output`
pub fn run(config: &BatchConfig) -> Result<BatchSummary> {
    config.validate()?;

    let input = std::fs::File::open(&config.input)?;
    let output = std::fs::File::create(&config.output)?;
    let summary = process_csv(input, output, config)?;

    tracing::info!(
        run_id = %summary.run_id,
        total = summary.total,
        pii = summary.pii,
        degraded = summary.degraded,
        "Dataset processed: {} records, {} PII ({:.1}%)",
        summary.total,
        summary.pii,
        summary.pii_ratio() * 100.0
    );

    Ok(summary)
}
