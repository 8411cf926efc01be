use std::path::{Path, PathBuf};

use crate::choices::SetupChoices;

pub const PRETTIERRC: &str = ".prettierrc";
pub const PRETTIERRC_JSON: &str = ".prettierrc.json";
pub const PRETTIERIGNORE: &str = ".prettierignore";
pub const VSCODE_DIR: &str = ".vscode";
pub const VSCODE_SETTINGS: &str = "settings.json";

/// Editor extension named as the default formatter in the VS Code settings.
pub const PRETTIER_VSCODE_EXTENSION: &str = "esbenp.prettier-vscode";

/// Patterns written to `.prettierignore`, one per line.
pub const IGNORED_PATHS: &[&str] = &[
    ".azure-pipelines",
    ".azuredevops",
    ".VSCodeCounter",
    "coverage",
    "build",
    "dist",
    "e2e",
    "junit",
    "node_modules",
    ".angular",
    "package-lock.json",
    "package.json",
    ".env",
];

/// The text content of every file a run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedConfig {
    /// Written verbatim to both `.prettierrc` and `.prettierrc.json`.
    pub formatter_config: String,
    pub editor_settings: Option<String>,
    pub ignore_list: Option<String>,
}

/// One file to be written, relative to the target directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

impl RenderedConfig {
    /// Files in write order: both formatter configs, the ignore list, then the editor settings.
    pub fn files(&self) -> Vec<RenderedFile> {
        let mut files = vec![
            RenderedFile {
                path: PathBuf::from(PRETTIERRC),
                content: self.formatter_config.clone(),
            },
            RenderedFile {
                path: PathBuf::from(PRETTIERRC_JSON),
                content: self.formatter_config.clone(),
            },
        ];
        if let Some(ignore) = &self.ignore_list {
            files.push(RenderedFile {
                path: PathBuf::from(PRETTIERIGNORE),
                content: ignore.clone(),
            });
        }
        if let Some(settings) = &self.editor_settings {
            files.push(RenderedFile {
                path: editor_settings_path(),
                content: settings.clone(),
            });
        }
        files
    }
}

/// `.vscode/settings.json`
pub fn editor_settings_path() -> PathBuf {
    Path::new(VSCODE_DIR).join(VSCODE_SETTINGS)
}

/// Renders every output file for the given choices. Pure, no I/O.
pub fn render(choices: SetupChoices) -> RenderedConfig {
    RenderedConfig {
        formatter_config: generate_prettierrc(choices.print_width, choices.tab_width),
        editor_settings: choices.format_on_save.then(generate_vscode_settings),
        ignore_list: choices.create_ignore_file.then(generate_prettierignore),
    }
}

// --- file generation helpers ---

fn generate_prettierrc(print_width: u32, tab_width: u32) -> String {
    format!(
        r#"{{
  "arrowParens": "avoid",
  "singleQuote": true,
  "bracketSpacing": true,
  "endOfLine": "lf",
  "tabWidth": {tab_width},
  "trailingComma": "none",
  "printWidth": {print_width},
  "semi": true,
  "htmlWhitespaceSensitivity": "ignore",
  "bracketSameLine": true
}}
"#
    )
}

fn generate_vscode_settings() -> String {
    format!(
        r#"{{
  "editor.formatOnSave": true,
  "editor.defaultFormatter": "{PRETTIER_VSCODE_EXTENSION}"
}}
"#
    )
}

fn generate_prettierignore() -> String {
    let mut content = IGNORED_PATHS.join("\n");
    content.push('\n');
    content
}
