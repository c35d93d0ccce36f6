mod cli;
mod preset;

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::generator::GeneratorError;

pub use cli::Cli;
pub use preset::Preset;

/// Fully resolved settings for one generator run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GeneratorConfig {
    pub rows: u64,
    pub output: PathBuf,
    pub seed: Option<u64>
}

impl GeneratorConfig {
    /// Resolves the preset and its overrides, rejecting a zero row count before any I/O happens.
    pub fn from_cli(cli: &Cli) -> Result<Self, GeneratorError> {
        let rows = cli.rows.unwrap_or_else(|| cli.preset.rows());

        if rows == 0 {
            return Err(GeneratorError::InvalidRowCount(rows))
        }

        Ok(Self {
            rows,
            output: cli.output.clone().unwrap_or_else(|| cli.preset.output_path()),
            seed: cli.seed
        })
    }

    /// A seeded RNG when a seed was given, otherwise one seeded from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng()
        }
    }
}
