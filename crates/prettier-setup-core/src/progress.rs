use serde::{Deserialize, Serialize};

/// Progress of a setup run, streamed to the caller as it happens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum ProgressEvent {
    StepStarted {
        step: usize,
        total: usize,
        message: String,
    },
    StepCompleted {
        step: usize,
        total: usize,
        message: String,
    },
    Error { message: String },
    /// Emitted exactly once, last.
    Finished { success: bool, message: String },
}

/// Closing message after a successful run.
pub const SUCCESS_MESSAGE: &str = "You're all set";
/// Closing message after a failed run.
pub const FAILURE_MESSAGE: &str = "Something clearly went wrong!";
