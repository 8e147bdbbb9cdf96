//! Error types for resistor-toolkit.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("division by zero: {0}")]
    DivisionByZero(String),
}

pub type Result<T> = std::result::Result<T, Error>;
