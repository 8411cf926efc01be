// prettier-setup-core: everything behind the prompts, free of terminal I/O

pub mod choices;
pub mod config;
pub mod error;
pub mod formatter;
pub mod port;
pub mod progress;
pub mod render;
pub mod scripted_prompt;
pub mod sequencer;
pub mod session;
pub mod validation;
pub mod writer;

pub use choices::{RawAnswers, SetupChoices, SetupMode};
pub use config::{CONFIG_FILE_NAME, FormatterCommand, SetupConfig, load_config};
pub use error::{Result, SetupError};
pub use formatter::{CommandFormatter, Formatter};
pub use port::UserPrompt;
pub use progress::ProgressEvent;
pub use render::{RenderedConfig, RenderedFile, render};
pub use session::{SetupOutcome, SetupSession, SetupState};
pub use validation::validate_answers;
pub use writer::ConfigWriter;
