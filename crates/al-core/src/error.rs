//! Error types for Al core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-friendly messages and exit codes.

use thiserror::Error;

use crate::crypto::CipherError;

/// Result type alias for Al operations.
pub type Result<T> = std::result::Result<T, AlError>;

/// Core error type for Al operations.
#[derive(Debug, Error)]
pub enum AlError {
    /// Encryption or decryption error
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// Filesystem or serialization error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource already exists (project, shortcut, note, link)
    #[error("{0}")]
    AlreadyExists(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for AlError {
    fn from(err: std::io::Error) -> Self {
        AlError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AlError {
    fn from(err: serde_json::Error) -> Self {
        AlError::Storage(format!("Invalid JSON: {}", err))
    }
}
