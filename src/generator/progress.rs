use crate::generator::GeneratorError;

/// Decides after which rows a progress line is reported.
///
/// The run is split into at most `MAX_CHECKPOINTS` equal buckets (the last one possibly shorter),
/// and a checkpoint falls at the end of every bucket. The final row is always a checkpoint.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ProgressPolicy {
    total_rows: u64,
    interval: u64
}

impl ProgressPolicy {
    pub const MAX_CHECKPOINTS: u64 = 20;

    /// # Errors
    /// Returns `GeneratorError::InvalidRowCount` when `total_rows` is zero.
    pub fn new(total_rows: u64) -> Result<Self, GeneratorError> {
        if total_rows == 0 {
            return Err(GeneratorError::InvalidRowCount(total_rows))
        }

        Ok(Self {
            total_rows,
            interval: total_rows.div_ceil(Self::MAX_CHECKPOINTS).max(1)
        })
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }

    pub fn is_checkpoint(&self, rows_written: u64) -> bool {
        rows_written > 0 && (rows_written % self.interval == 0 || rows_written == self.total_rows)
    }

    pub fn percent(&self, rows_written: u64) -> f64 {
        rows_written as f64 / self.total_rows as f64 * 100.0
    }
}
