use std::io::Write;

use csv::WriterBuilder;
use rand::Rng;
use tracing::debug;

use crate::generator::{GeneratorError, ProgressPolicy, RecordGenerator};
use crate::models::TransactionRecord;
use crate::types::format_count;

/// Shape of a completed run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GenerationSummary {
    pub rows: u64,
    pub columns: usize
}

/// Writes a header followed by `row_count` synthesized records to `sink`, in row order.
///
/// A progress line is written to `status` at every checkpoint of the `ProgressPolicy` and flushed
/// right away so it stays visible while the sink itself is buffered. The row count is validated
/// before anything is written.
///
/// # Errors
/// Returns `GeneratorError::InvalidRowCount` for a zero row count, and propagates any I/O or CSV
/// failure from the sink or the status stream.
pub fn generate<W, R, S>(sink: W, row_count: u64, generator: &mut RecordGenerator<R>, status: &mut S) -> Result<GenerationSummary, GeneratorError>
where
    W: Write,
    R: Rng,
    S: Write
{
    let progress = ProgressPolicy::new(row_count)?;
    debug!("Writing {row_count} rows with a progress interval of {}", progress.interval());

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);

    writer.write_record(TransactionRecord::HEADERS)?;

    for row_index in 0..row_count {
        let record = generator.next_record(row_index);
        writer.serialize(&record)?;

        let rows_written = row_index + 1;

        if progress.is_checkpoint(rows_written) {
            writeln!(status, "Progress: {:.0}% ({} rows)", progress.percent(rows_written), format_count(rows_written))?;
            status.flush()?;
        }
    }

    writer.flush()?;

    Ok(GenerationSummary {
        rows: row_count,
        columns: TransactionRecord::HEADERS.len()
    })
}
