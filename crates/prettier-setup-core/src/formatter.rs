use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use crate::config::FormatterCommand;
use crate::error::{Result, SetupError};

/// Reformats every file below a directory.
pub trait Formatter {
    /// Human readable command line, used in progress messages.
    fn describe(&self) -> String;

    /// Runs synchronously with `root` as the working directory.
    ///
    /// # Errors
    /// Returns [`SetupError::ExternalFormatterFailure`] if the run does not succeed.
    fn format_tree(&self, root: &Path) -> Result<()>;
}

/// Runs an external program, `npx prettier --write .` by default.
#[derive(Debug, Clone, Default)]
pub struct CommandFormatter {
    command: FormatterCommand,
}

impl CommandFormatter {
    pub fn new(command: FormatterCommand) -> Self {
        Self { command }
    }
}

impl Formatter for CommandFormatter {
    fn describe(&self) -> String {
        self.command.display()
    }

    fn format_tree(&self, root: &Path) -> Result<()> {
        let command = self.describe();
        info!(%command, cwd = %root.display(), "running formatter");
        let status = Command::new(&self.command.program)
            .args(&self.command.args)
            .current_dir(root)
            .status();
        match status {
            Ok(s) if s.success() => Ok(()),
            Ok(s) => {
                let reason = match s.code() {
                    Some(code) => format!("exited with code {code}"),
                    None => "terminated by signal".to_string(),
                };
                warn!(%command, %reason, "formatter failed");
                Err(SetupError::ExternalFormatterFailure { command, reason })
            }
            Err(e) => {
                warn!(%command, error = %e, "formatter could not be started");
                Err(SetupError::ExternalFormatterFailure {
                    command,
                    reason: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn command(program: &str, args: &[&str]) -> CommandFormatter {
        CommandFormatter::new(FormatterCommand {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        })
    }

    #[test]
    fn test_default_describe() {
        assert_eq!(CommandFormatter::default().describe(), "npx prettier --write .");
    }

    #[test]
    fn test_missing_program_is_formatter_failure() {
        let tmp = TempDir::new().unwrap();
        let formatter = command("prettier-setup-no-such-program", &[]);

        let err = formatter.format_tree(tmp.path()).unwrap_err();

        assert!(matches!(err, SetupError::ExternalFormatterFailure { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_run() {
        let tmp = TempDir::new().unwrap();
        assert!(command("true", &[]).format_tree(tmp.path()).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_formatter_failure() {
        let tmp = TempDir::new().unwrap();

        let err = command("sh", &["-c", "exit 3"]).format_tree(tmp.path()).unwrap_err();

        match err {
            SetupError::ExternalFormatterFailure { command, reason } => {
                assert_eq!(command, "sh -c exit 3");
                assert!(reason.contains('3'));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_target_directory() {
        let tmp = TempDir::new().unwrap();

        command("sh", &["-c", "touch formatted"])
            .format_tree(tmp.path())
            .unwrap();

        assert!(tmp.path().join("formatted").exists());
    }
}
