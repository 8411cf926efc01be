use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use prettier_setup_core::{Result, SetupError, SetupMode, UserPrompt};

const MODE_ITEMS: &[SetupMode] = &[SetupMode::Standard, SetupMode::Custom];
const YES_NO: &[&str] = &["Yes", "No"];

/// Terminal prompts backed by dialoguer.
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn select(&self, prompt: &str, items: &[&str]) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(prompt_error)
    }

    fn yes_no(&self, prompt: &str) -> Result<bool> {
        Ok(self.select(prompt, YES_NO)? == 0)
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(prompt_error)
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl UserPrompt for DialoguerPrompt {
    fn select_mode(&self) -> Result<SetupMode> {
        let labels: Vec<&str> = MODE_ITEMS.iter().map(SetupMode::label).collect();
        let index = self.select("Which setup would you like?", &labels)?;
        MODE_ITEMS
            .get(index)
            .copied()
            .ok_or_else(|| SetupError::Prompt("invalid selection".to_string()))
    }

    fn input_print_width(&self, default: &str) -> Result<String> {
        self.input("How many characters until line break?", default)
    }

    fn input_tab_width(&self, default: &str) -> Result<String> {
        self.input("What's the size of tab indentation?", default)
    }

    fn confirm_ignore_file(&self) -> Result<bool> {
        self.yes_no("Would you like to add a .prettierignore file and format all files?")
    }

    fn confirm_format_on_save(&self) -> Result<bool> {
        self.yes_no("Would you like to format on save?")
    }
}

fn prompt_error(e: dialoguer::Error) -> SetupError {
    SetupError::Prompt(e.to_string())
}
