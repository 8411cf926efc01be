use std::cell::RefCell;

use crate::choices::SetupMode;
use crate::error::{Result, SetupError};
use crate::port::UserPrompt;

/// Canned answers for driving the wizard without a terminal.
///
/// Unset width answers fall back to the default offered by the question.
pub struct ScriptedPrompt {
    asked: RefCell<Vec<&'static str>>,
    mode: SetupMode,
    print_width: Option<String>,
    tab_width: Option<String>,
    ignore_file: bool,
    format_on_save: bool,
    fail_on: Option<&'static str>,
}

impl ScriptedPrompt {
    pub fn new(mode: SetupMode) -> Self {
        Self {
            asked: RefCell::new(Vec::new()),
            mode,
            print_width: None,
            tab_width: None,
            ignore_file: true,
            format_on_save: true,
            fail_on: None,
        }
    }

    pub fn with_print_width(mut self, answer: &str) -> Self {
        self.print_width = Some(answer.to_string());
        self
    }

    pub fn with_tab_width(mut self, answer: &str) -> Self {
        self.tab_width = Some(answer.to_string());
        self
    }

    pub fn with_ignore_file(mut self, answer: bool) -> Self {
        self.ignore_file = answer;
        self
    }

    pub fn with_format_on_save(mut self, answer: bool) -> Self {
        self.format_on_save = answer;
        self
    }

    /// Makes the named question fail as if the input stream had closed.
    pub fn failing_on(mut self, question: &'static str) -> Self {
        self.fail_on = Some(question);
        self
    }

    /// Names of the questions asked so far, in order.
    pub fn asked(&self) -> Vec<&'static str> {
        self.asked.borrow().clone()
    }

    fn ask(&self, question: &'static str) -> Result<()> {
        self.asked.borrow_mut().push(question);
        if self.fail_on == Some(question) {
            return Err(SetupError::Prompt(format!("input closed at {question}")));
        }
        Ok(())
    }
}

impl UserPrompt for ScriptedPrompt {
    fn select_mode(&self) -> Result<SetupMode> {
        self.ask("mode")?;
        Ok(self.mode)
    }

    fn input_print_width(&self, default: &str) -> Result<String> {
        self.ask("print_width")?;
        Ok(self.print_width.clone().unwrap_or_else(|| default.to_string()))
    }

    fn input_tab_width(&self, default: &str) -> Result<String> {
        self.ask("tab_width")?;
        Ok(self.tab_width.clone().unwrap_or_else(|| default.to_string()))
    }

    fn confirm_ignore_file(&self) -> Result<bool> {
        self.ask("ignore_file")?;
        Ok(self.ignore_file)
    }

    fn confirm_format_on_save(&self) -> Result<bool> {
        self.ask("format_on_save")?;
        Ok(self.format_on_save)
    }
}
