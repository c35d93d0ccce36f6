use std::ffi::OsString;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::generator::GeneratorError;

const STAGING_SUFFIX: &str = ".partial";

/// An output file that only appears at its final path once it has been completely written.
///
/// Rows are written to a sibling `<name>.partial` file. `commit` renames it onto the target;
/// dropping an uncommitted `StagedFile` removes the staging file, so a failed run never leaves a
/// truncated file that looks complete.
pub struct StagedFile {
    staging_path: PathBuf,
    target_path: PathBuf,
    committed: bool
}

impl StagedFile {
    /// Creates the staging file next to `target_path`, creating missing parent directories first.
    pub fn create(target_path: &Path) -> Result<(Self, File), GeneratorError> {
        let file_name = target_path.file_name()
            .ok_or_else(|| GeneratorError::InvalidOutputPath(target_path.display().to_string()))?;

        if let Some(parent) = target_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut staging_name = OsString::from(file_name);
        staging_name.push(STAGING_SUFFIX);
        let staging_path = target_path.with_file_name(staging_name);

        let file = File::create(&staging_path)?;
        debug!("Staging output at {}", staging_path.display());

        let staged = Self {
            staging_path,
            target_path: target_path.to_path_buf(),
            committed: false
        };

        Ok((staged, file))
    }

    pub fn staging_path(&self) -> &Path {
        &self.staging_path
    }

    /// Moves the fully written staging file onto the target path, replacing any previous output.
    pub fn commit(mut self) -> Result<(), GeneratorError> {
        fs::rename(&self.staging_path, &self.target_path)?;
        self.committed = true;

        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }

        match fs::remove_file(&self.staging_path) {
            Ok(()) => debug!("Removed incomplete output {}", self.staging_path.display()),
            Err(error) if error.kind() == ErrorKind::NotFound => {},
            Err(error) => error!("Failed to remove incomplete output {}: {error}", self.staging_path.display())
        }
    }
}
