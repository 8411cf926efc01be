use console::style;
use prettier_setup_core::ProgressEvent;

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), style(message).green())
}

pub fn format_failure(message: &str) -> String {
    format!("{} {}", style("✗").red(), style(message).red())
}

/// Prints a progress event. Errors are left to the caller, which reports the
/// full error chain once.
pub fn print_progress(event: &ProgressEvent) {
    match event {
        ProgressEvent::StepStarted { .. } => {}
        ProgressEvent::StepCompleted {
            step,
            total,
            message,
        } => {
            println!("[{step}/{total}] {}", format_success(message));
        }
        ProgressEvent::Error { message } => tracing::debug!(%message, "setup error"),
        ProgressEvent::Finished { success: true, message } => {
            println!("{}", format_success(message));
        }
        ProgressEvent::Finished {
            success: false,
            message,
        } => {
            eprintln!("{}", format_failure(message));
        }
    }
}
