//! Error types for clearpoint.

use thiserror::Error;

/// Result type alias using clearpoint's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for clearpoint operations.
///
/// Only the AI extraction path can fail: the heuristic classifier and both
/// taxonomy mappings are total functions with no error kind. `Config`,
/// `Service`, and `Parse` are the three adapter failures the extraction
/// service downgrades to the heuristic fallback.
#[derive(Error, Debug)]
pub enum Error {
    /// AI backend invoked without required configuration (e.g. API key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream completion service returned an error status
    #[error("Service error: {0}")]
    Service(String),

    /// Completion response could not be interpreted as extraction output
    #[error("Parse error: {0}")]
    Parse(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(uuid::Uuid),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
