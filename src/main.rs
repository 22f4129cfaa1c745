//! a3s-pii - classify and redact PII in a CSV of JSON records

use a3s_pii::BatchConfig;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "a3s-pii")]
#[command(author = "A3S Lab")]
#[command(version)]
#[command(about = "Detect and redact PII in CSV rows of JSON records")]
struct Cli {
    /// Input CSV file
    #[arg(env = "A3S_PII_INPUT")]
    input: PathBuf,

    /// Output CSV file
    #[arg(short, long, env = "A3S_PII_OUTPUT", default_value = "redacted_output.csv")]
    output: PathBuf,

    /// Column holding the record id
    #[arg(long, default_value = "record_id")]
    id_column: String,

    /// Column holding the record JSON
    #[arg(long, default_value = "data_json")]
    data_column: String,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    summary_json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("a3s_pii={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BatchConfig {
        id_column: cli.id_column,
        data_column: cli.data_column,
        ..BatchConfig::new(cli.input, cli.output)
    };

    let summary = a3s_pii::run(&config)
        .with_context(|| format!("Failed to process {}", config.input.display()))?;

    if cli.summary_json {
        let json = summary.to_json().context("Failed to serialize summary")?;
        println!("{}", json);
    } else {
        println!("Dataset processed: {} records", summary.total);
        println!(
            "PII detections: {} ({:.1}%)",
            summary.pii,
            summary.pii_ratio() * 100.0
        );
        if summary.degraded > 0 {
            println!("Unparseable rows passed through: {}", summary.degraded);
        }
    }

    Ok(())
}
