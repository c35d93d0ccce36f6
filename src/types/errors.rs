use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeightedChoiceError {
    #[error("Weighted choice error: no values were provided")]
    Empty,
    #[error("Weighted choice error: {0}")]
    InvalidWeights(String)
}
