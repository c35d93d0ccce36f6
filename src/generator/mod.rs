mod errors;
mod progress;
mod record_generator;
mod staging;
mod writer;

pub use errors::GeneratorError;
pub use progress::ProgressPolicy;
pub use record_generator::RecordGenerator;
pub use staging::StagedFile;
pub use writer::{generate, GenerationSummary};
