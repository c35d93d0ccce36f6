mod config;
mod generator;
mod models;
mod types;

use std::fs;
use std::io::{stderr, stdout, Write};
use std::process::exit;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::{debug, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{Cli, GeneratorConfig};
use crate::generator::{generate, GenerationSummary, RecordGenerator, StagedFile};
use crate::types::format_count;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

fn main() -> Result<()> {
    let cli = parse_cli();

    setup_logging(parse_log_level(&cli.log_level));

    let config = GeneratorConfig::from_cli(&cli)?;
    debug!("Resolved configuration: {config:?}");

    let mut status = stdout().lock();

    let timer = Instant::now();
    let summary = run(&config, &mut status)?;
    let duration = timer.elapsed();

    info!("Generated {} rows in: {duration:?}", summary.rows);

    write_report(&config, &summary, &mut status)?;

    Ok(())
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if error.kind() == ErrorKind::InvalidValue => {
            error.print().ok();
            eprintln!("\n{}", Cli::command().render_usage());
            exit(error.exit_code());
        }
        Err(error) => error.exit()
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the progress lines and the final report, so diagnostics go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn run<S: Write>(config: &GeneratorConfig, status: &mut S) -> Result<GenerationSummary> {
    let (staged, file) = StagedFile::create(&config.output)
        .with_context(|| format!("Failed to create output file for {}", config.output.display()))?;

    writeln!(status, "Generating {} rows of data...", format_count(config.rows))?;

    info!("Writing rows to {}", staged.staging_path().display());

    let mut generator = RecordGenerator::new(config.rng())?;
    let summary = generate(file, config.rows, &mut generator, status)
        .with_context(|| format!("Failed to write {}", staged.staging_path().display()))?;

    staged.commit()
        .with_context(|| format!("Failed to move finished output to {}", config.output.display()))?;

    Ok(summary)
}

fn write_report<S: Write>(config: &GeneratorConfig, summary: &GenerationSummary, status: &mut S) -> Result<()> {
    let size_bytes = fs::metadata(&config.output)
        .with_context(|| format!("Failed to inspect {}", config.output.display()))?
        .len();

    writeln!(status)?;
    writeln!(status, "Generated {}", config.output.display())?;
    writeln!(status, "File size: {:.1} MB", size_bytes as f64 / BYTES_PER_MEGABYTE)?;
    writeln!(status, "Columns: {}", summary.columns)?;
    writeln!(status, "Rows: {}", format_count(summary.rows))?;

    status.flush()?;

    Ok(())
}
