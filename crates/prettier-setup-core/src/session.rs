//! The setup wizard as an explicit, run-once state machine.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::choices::{SetupChoices, SetupMode};
use crate::error::{Result, SetupError};
use crate::formatter::Formatter;
use crate::port::UserPrompt;
use crate::progress::{FAILURE_MESSAGE, ProgressEvent, SUCCESS_MESSAGE};
use crate::render::render;
use crate::sequencer::collect_answers;
use crate::validation::validate_answers;
use crate::writer::ConfigWriter;

/// Wizard state. No state is entered twice in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupState {
    Idle,
    Prompting,
    Validating,
    Rendering,
    Writing,
    Reformatting,
    Done,
    Failed,
}

impl SetupState {
    /// Forward successor on success. `Reformatting` is only visited when the
    /// ignore file was requested.
    pub fn next(self, reformat: bool) -> Self {
        match self {
            SetupState::Idle => SetupState::Prompting,
            SetupState::Prompting => SetupState::Validating,
            SetupState::Validating => SetupState::Rendering,
            SetupState::Rendering => SetupState::Writing,
            SetupState::Writing if reformat => SetupState::Reformatting,
            SetupState::Writing | SetupState::Reformatting => SetupState::Done,
            SetupState::Done => SetupState::Done,
            SetupState::Failed => SetupState::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SetupState::Done | SetupState::Failed)
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOutcome {
    pub choices: SetupChoices,
    /// Full paths, in write order.
    pub written: Vec<PathBuf>,
    pub formatted: bool,
}

/// Drives prompting, validation, rendering, writing and reformatting once.
pub struct SetupSession<P: UserPrompt, F: Formatter> {
    prompt: P,
    formatter: F,
    writer: ConfigWriter,
    preselected: Option<SetupMode>,
    history: Vec<SetupState>,
}

impl<P: UserPrompt, F: Formatter> SetupSession<P, F> {
    pub fn new(prompt: P, formatter: F, root: impl Into<PathBuf>) -> Self {
        Self {
            prompt,
            formatter,
            writer: ConfigWriter::new(root),
            preselected: None,
            history: vec![SetupState::Idle],
        }
    }

    /// Answers the first question up front.
    pub fn with_mode(mut self, mode: SetupMode) -> Self {
        self.preselected = Some(mode);
        self
    }

    pub fn root(&self) -> &Path {
        self.writer.root()
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Every state entered so far, starting with `Idle`.
    pub fn history(&self) -> &[SetupState] {
        &self.history
    }

    pub fn state(&self) -> SetupState {
        self.history.last().copied().unwrap_or(SetupState::Idle)
    }

    /// Runs the wizard to `Done` or `Failed`.
    ///
    /// Both width answers are validated before anything is written; a
    /// malformed answer leaves the target directory untouched.
    ///
    /// # Errors
    /// Returns the error that moved the session to `Failed`. Files written
    /// before a write or formatter failure are left in place. A session that
    /// already reached `Done` or `Failed` returns [`SetupError::SessionFinished`]
    /// without asking, writing or reformatting again.
    pub fn run(&mut self, on_progress: impl Fn(ProgressEvent)) -> Result<SetupOutcome> {
        let state = self.state();
        if state.is_terminal() {
            return Err(SetupError::SessionFinished(state));
        }
        match self.advance(&on_progress) {
            Ok(outcome) => {
                // Writing and Reformatting both lead to Done
                self.transition(false);
                on_progress(ProgressEvent::Finished {
                    success: true,
                    message: SUCCESS_MESSAGE.to_string(),
                });
                Ok(outcome)
            }
            Err(e) => {
                self.enter(SetupState::Failed);
                on_progress(ProgressEvent::Error {
                    message: e.to_string(),
                });
                on_progress(ProgressEvent::Finished {
                    success: false,
                    message: FAILURE_MESSAGE.to_string(),
                });
                Err(e)
            }
        }
    }

    fn advance(&mut self, on_progress: &impl Fn(ProgressEvent)) -> Result<SetupOutcome> {
        self.transition(false);
        let answers = collect_answers(&self.prompt, self.preselected)?;

        self.transition(false);
        let choices = validate_answers(&answers)?;
        info!(
            mode = choices.mode.label(),
            print_width = choices.print_width,
            tab_width = choices.tab_width,
            ignore_file = choices.create_ignore_file,
            format_on_save = choices.format_on_save,
            "answers validated"
        );

        self.transition(false);
        let files = render(choices).files();

        self.transition(false);
        let reformat = choices.create_ignore_file;
        let total = files.len() + usize::from(reformat);
        let mut written = Vec::with_capacity(files.len());
        for (i, file) in files.iter().enumerate() {
            let step = i + 1;
            let name = file.path.display().to_string();
            on_progress(ProgressEvent::StepStarted {
                step,
                total,
                message: format!("Writing {name}"),
            });
            written.push(self.writer.write(file)?);
            on_progress(ProgressEvent::StepCompleted {
                step,
                total,
                message: format!("Wrote {name}"),
            });
        }

        if reformat {
            self.transition(reformat);
            let command = self.formatter.describe();
            on_progress(ProgressEvent::StepStarted {
                step: total,
                total,
                message: format!("Running {command}"),
            });
            self.formatter.format_tree(self.writer.root())?;
            on_progress(ProgressEvent::StepCompleted {
                step: total,
                total,
                message: "Formatted all files".to_string(),
            });
        }

        Ok(SetupOutcome {
            choices,
            written,
            formatted: reformat,
        })
    }

    /// Moves to the forward successor of the current state.
    fn transition(&mut self, reformat: bool) -> SetupState {
        let next = self.state().next(reformat);
        self.enter(next);
        next
    }

    fn enter(&mut self, state: SetupState) {
        info!(from = ?self.state(), to = ?state, "setup state");
        self.history.push(state);
    }
}
