//! Application-level errors
//!
//! Calculator operations themselves never fail; non-finite results are
//! ordinary values shown on the display. These errors cover the shell around
//! the calculator: the terminal, the log file and headless key input.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, drawing or event polling failed
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    /// The `--log-file` target could not be opened
    #[error("cannot open log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A `--keys` sequence contained a character with no binding
    #[error("unknown key '{key}' at position {position} in key sequence")]
    UnknownKey { key: char, position: usize },
}
