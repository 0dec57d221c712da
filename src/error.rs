use thiserror::Error;

use crate::codec::DecodeError;

/// Journal error types
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Invalid entry: {0}")]
    Validation(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Malformed journal line: {0}")]
    Decode(#[from] DecodeError),

    #[error("Journal file error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for journal operations
pub type Result<T> = std::result::Result<T, JournalError>;
