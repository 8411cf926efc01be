use tracing::debug;

use crate::choices::{DEFAULT_PRINT_WIDTH, DEFAULT_TAB_WIDTH, RawAnswers, SetupMode};
use crate::error::Result;
use crate::port::UserPrompt;

/// Asks the setup questions in their fixed order.
///
/// `preselected` answers the first question without asking it. On the
/// Standard path nothing else is asked and every field takes its default.
///
/// # Errors
/// Propagates prompt failures; the answers themselves are not validated here.
pub fn collect_answers<P: UserPrompt>(
    prompt: &P,
    preselected: Option<SetupMode>,
) -> Result<RawAnswers> {
    let mode = match preselected {
        Some(mode) => mode,
        None => prompt.select_mode()?,
    };
    debug!(mode = mode.label(), "setup mode selected");

    if mode == SetupMode::Standard {
        return Ok(RawAnswers::standard());
    }

    let print_width = prompt.input_print_width(&DEFAULT_PRINT_WIDTH.to_string())?;
    let tab_width = prompt.input_tab_width(&DEFAULT_TAB_WIDTH.to_string())?;
    let create_ignore_file = prompt.confirm_ignore_file()?;
    let format_on_save = prompt.confirm_format_on_save()?;

    Ok(RawAnswers {
        mode,
        print_width,
        tab_width,
        create_ignore_file,
        format_on_save,
    })
}
