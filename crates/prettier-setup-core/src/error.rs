use std::io;
use std::path::PathBuf;

use crate::session::SetupState;

/// Errors raised while collecting answers and generating the configuration files.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// A width answer could not be read as a positive whole number.
    #[error("{field} must be a positive whole number, got '{value}'")]
    MalformedNumericInput { field: &'static str, value: String },

    /// Creating a directory or writing a file failed.
    #[error("failed to write {}: {source}", path.display())]
    FilesystemWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The external formatter could not be started or exited abnormally.
    #[error("formatter `{command}` failed: {reason}")]
    ExternalFormatterFailure { command: String, reason: String },

    /// The terminal prompt failed (closed input, interrupted read).
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// `run` was called on a session that already reached `Done` or `Failed`.
    #[error("setup session already finished ({0:?})")]
    SessionFinished(SetupState),

    /// The configuration file exists but could not be loaded.
    #[error("invalid configuration file {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, SetupError>;

impl SetupError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FilesystemWriteFailure {
            path: path.into(),
            source,
        }
    }
}
