//! Error types for truckreg

use thiserror::Error;

/// Form-level failures surfaced to the user on the current page or command
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("username already exists")]
    DuplicateUser,

    #[error("truck number is already registered")]
    DuplicateTruck,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Errors raised by the backing table stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to replace table file: {0}")]
    Replace(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Form(#[from] FormError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The form error behind this error, if that is what it is
    pub fn as_form_error(&self) -> Option<&FormError> {
        match self {
            Error::Form(e) => Some(e),
            _ => None,
        }
    }
}
