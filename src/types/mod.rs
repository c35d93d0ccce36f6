mod errors;
mod formatting;
#[cfg(test)]
mod tests;
mod weighted;

pub use errors::WeightedChoiceError;
pub use formatting::{format_count, format_customer_id, format_product_id, format_transaction_id};
pub use weighted::WeightedChoice;

/// Zero-based position of a data row in the output (header excluded).
pub type RowIndex = u64;
