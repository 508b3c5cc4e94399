//! Error types for repset.

use thiserror::Error;

/// Errors that can occur across repset.
#[derive(Debug, Error)]
pub enum RepsetError {
    /// Configuration is invalid or could not be resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Parsing or serialization failed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for RepsetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
