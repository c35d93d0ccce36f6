use std::path::PathBuf;

use clap::Parser;

use crate::config::Preset;

/// Generates a CSV file of synthetic retail transactions for streaming-analysis tests.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Size preset selecting the row count and output path
    #[arg(value_enum, ignore_case = true, default_value = "medium")]
    pub preset: Preset,

    /// Number of data rows to write, overriding the preset
    #[arg(long)]
    pub rows: Option<u64>,

    /// Output file, overriding the preset
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible output; omitted means a fresh random dataset on every run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level for diagnostics on stderr: error, warn, info, debug or trace
    #[arg(long, default_value = "error")]
    pub log_level: String
}
