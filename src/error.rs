//! Error types for calc

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Calc errors
#[derive(Error, Debug)]
pub enum Error {
    /// The single domain error: `divide` was handed a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
