use std::io;

use thiserror::Error;

use crate::types::WeightedChoiceError;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid row count [{0}]: at least one data row must be requested")]
    InvalidRowCount(u64),
    #[error("Invalid output path [{0}]: a file name is required")]
    InvalidOutputPath(String),
    #[error("Generator error: {0}")]
    Distribution(#[from] WeightedChoiceError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error)
}
