use pest::error::Error as PestError;
use thiserror::Error;

use super::parser::Rule;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Syntax error: {0}")]
    PestError(#[from] PestError<Rule>),

    #[error("Parser produced no root node")]
    MissingRoot,
}

pub type Result<T> = std::result::Result<T, ParserError>;
