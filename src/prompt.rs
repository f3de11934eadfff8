//! Single-line interactive text prompt.

use std::io::{stdin, stdout, Write};

use crate::error::{Error, Result};

/// Prompts the user for a single line of input.
///
/// The message is printed followed by `: `, and one line is read from
/// standard input. Leading and trailing whitespace is trimmed from the
/// response. There is no re-prompt loop; an empty response is reported
/// to the caller, who decides whether to ask again.
///
/// # Errors
///
/// Returns [`Error::EmptyResponse`] if the trimmed response is empty,
/// or [`Error::Stdio`] if the terminal could not be read or written.
pub fn prompt_string(message: &str) -> Result<String> {
    print!("{message}: ");
    stdout().flush().map_err(Error::Stdio)?;

    let mut input = String::new();
    stdin().read_line(&mut input).map_err(Error::Stdio)?;

    let response = input.trim().to_string();
    if response.is_empty() {
        return Err(Error::EmptyResponse);
    }

    Ok(response)
}
