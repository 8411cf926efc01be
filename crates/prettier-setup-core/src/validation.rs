use crate::choices::{RawAnswers, SetupChoices};
use crate::error::{Result, SetupError};

/// Parses a width answer: surrounding whitespace is ignored, the rest must be
/// a strictly positive decimal integer.
///
/// # Errors
/// Returns [`SetupError::MalformedNumericInput`] when the answer is not a positive number.
pub fn parse_width(field: &'static str, raw: &str) -> Result<u32> {
    let malformed = || SetupError::MalformedNumericInput {
        field,
        value: raw.to_string(),
    };
    let value: u32 = raw.trim().parse().map_err(|_| malformed())?;
    if value == 0 {
        return Err(malformed());
    }
    Ok(value)
}

/// Checks both width answers and builds the immutable [`SetupChoices`].
///
/// # Errors
/// Returns [`SetupError::MalformedNumericInput`] for the first width that fails to parse.
pub fn validate_answers(raw: &RawAnswers) -> Result<SetupChoices> {
    let print_width = parse_width("printWidth", &raw.print_width)?;
    let tab_width = parse_width("tabWidth", &raw.tab_width)?;
    Ok(SetupChoices {
        mode: raw.mode,
        print_width,
        tab_width,
        create_ignore_file: raw.create_ignore_file,
        format_on_save: raw.format_on_save,
    })
}
