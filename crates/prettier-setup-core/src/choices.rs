/// Default maximum line length written to the formatter config.
pub const DEFAULT_PRINT_WIDTH: u32 = 100;
/// Default indentation width written to the formatter config.
pub const DEFAULT_TAB_WIDTH: u32 = 2;

/// Which setup path the user picked on the first question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupMode {
    /// Every field takes its default, no further questions.
    Standard,
    /// Each configurable field is asked for individually.
    Custom,
}

impl SetupMode {
    pub fn label(&self) -> &'static str {
        match self {
            SetupMode::Standard => "Standard (Full)",
            SetupMode::Custom => "Custom",
        }
    }
}

/// Answers exactly as they came back from the prompts.
///
/// The width answers are free text and stay unparsed until
/// [`crate::validation::validate_answers`] turns them into [`SetupChoices`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnswers {
    pub mode: SetupMode,
    pub print_width: String,
    pub tab_width: String,
    pub create_ignore_file: bool,
    pub format_on_save: bool,
}

impl RawAnswers {
    /// Answers implied by the Standard path.
    pub fn standard() -> Self {
        Self {
            mode: SetupMode::Standard,
            print_width: DEFAULT_PRINT_WIDTH.to_string(),
            tab_width: DEFAULT_TAB_WIDTH.to_string(),
            create_ignore_file: true,
            format_on_save: true,
        }
    }
}

/// Validated answers for a single run.
///
/// Built once after validation and handed by value to rendering and writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupChoices {
    pub mode: SetupMode,
    pub print_width: u32,
    pub tab_width: u32,
    /// Emit `.prettierignore` and reformat the tree afterwards.
    pub create_ignore_file: bool,
    /// Emit `.vscode/settings.json`.
    pub format_on_save: bool,
}

impl Default for SetupChoices {
    fn default() -> Self {
        Self {
            mode: SetupMode::Standard,
            print_width: DEFAULT_PRINT_WIDTH,
            tab_width: DEFAULT_TAB_WIDTH,
            create_ignore_file: true,
            format_on_save: true,
        }
    }
}
