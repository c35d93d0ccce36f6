use std::path::PathBuf;

use clap::ValueEnum;

const OUTPUT_DIRECTORY: &str = "test-datasets/large";

/// Named output sizes selectable from the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum Preset {
    Small,
    Medium,
    Large,
    Xlarge
}

impl Preset {
    pub fn rows(&self) -> u64 {
        match self {
            Preset::Small => 10_000,
            Preset::Medium => 100_000,
            Preset::Large => 1_000_000,
            Preset::Xlarge => 5_000_000
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Small => "small",
            Preset::Medium => "medium",
            Preset::Large => "large",
            Preset::Xlarge => "xlarge"
        }
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(OUTPUT_DIRECTORY).join(format!("transactions-{}.csv", self.name()))
    }
}
