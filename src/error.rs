use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The sub process exited with non-success code.")]
    SubProcessExit,

    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Empty response")]
    EmptyResponse,

    #[error("Nothing was selected")]
    NoSelection,

    #[error("Fuzzy search failed: {}", _0)]
    SearchFailed(String),

    #[error("Could not decode fuzzy search output `{}`: {}", .line, .reason)]
    DecodeFailed { line: String, reason: String },

    #[error("STDIO error: {}", _0)]
    Stdio(std::io::Error),
}

impl Error {
    pub fn decode_failed(line: String, reason: String) -> Self {
        Self::DecodeFailed { line, reason }
    }
}
