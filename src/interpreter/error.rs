use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParserError;

#[derive(Error, Debug)]
pub enum InterpreterError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParserError),

    #[error("Failed to read '{}': {source}", .path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "cli")]
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Wrong argument count: {0}, expected 0 or 1")]
    Usage(usize),
}

pub type Result<T> = std::result::Result<T, InterpreterError>;
