//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Precondition not met: {0}")]
    PreconditionNotMet(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
