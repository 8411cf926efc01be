use crate::choices::SetupMode;
use crate::error::Result;

/// The questions the setup wizard asks, independent of the terminal library.
///
/// Every method blocks until the user answers.
pub trait UserPrompt {
    /// "Which setup would you like?" Standard or Custom.
    fn select_mode(&self) -> Result<SetupMode>;
    /// Free text, `default` returned on empty input.
    fn input_print_width(&self, default: &str) -> Result<String>;
    /// Free text, `default` returned on empty input.
    fn input_tab_width(&self, default: &str) -> Result<String>;
    /// Yes/No: create `.prettierignore` and format all files.
    fn confirm_ignore_file(&self) -> Result<bool>;
    /// Yes/No: enable format on save.
    fn confirm_format_on_save(&self) -> Result<bool>;
}
