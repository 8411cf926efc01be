use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SetupError};

/// File name looked up in the target directory when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "prettier-setup.yaml";

/// Tool settings that are not asked interactively.
///
/// Read from `prettier-setup.yaml`; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Command run over the target directory after the ignore file is written.
    pub formatter: FormatterCommand,
}

/// External program plus arguments, run with the target directory as working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for FormatterCommand {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            args: vec![
                "prettier".to_string(),
                "--write".to_string(),
                ".".to_string(),
            ],
        }
    }
}

impl FormatterCommand {
    /// Command line as shown to the user, e.g. `npx prettier --write .`.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Loads the configuration file.
///
/// A missing file yields the defaults.
///
/// # Errors
/// Returns [`SetupError::Config`] if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<SetupConfig> {
    if !path.exists() {
        return Ok(SetupConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|e| SetupError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    // an empty document deserializes to unit, not a mapping
    if content.trim().is_empty() {
        return Ok(SetupConfig::default());
    }
    serde_yaml::from_str(&content).map_err(|e| SetupError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
