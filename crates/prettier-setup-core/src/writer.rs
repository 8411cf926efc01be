use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SetupError};
use crate::render::RenderedFile;

/// Writes rendered files below a target directory.
///
/// Existing files are overwritten. Parent directories are created only for
/// files that are actually written.
#[derive(Debug, Clone)]
pub struct ConfigWriter {
    root: PathBuf,
}

impl ConfigWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a single file and returns its full path.
    ///
    /// # Errors
    /// Returns [`SetupError::FilesystemWriteFailure`] if the parent directory
    /// cannot be created or the file cannot be written.
    pub fn write(&self, file: &RenderedFile) -> Result<PathBuf> {
        let full_path = self.root.join(&file.path);
        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                fs::create_dir_all(parent).map_err(|e| SetupError::write(parent, e))?;
            }
        }
        fs::write(&full_path, &file.content).map_err(|e| SetupError::write(&full_path, e))?;
        debug!(path = %full_path.display(), bytes = file.content.len(), "wrote file");
        Ok(full_path)
    }

    /// Writes every file in order, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the first [`SetupError::FilesystemWriteFailure`]; files written
    /// before it are left in place.
    pub fn write_all(&self, files: &[RenderedFile]) -> Result<Vec<PathBuf>> {
        files.iter().map(|file| self.write(file)).collect()
    }
}
