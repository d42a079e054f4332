//! Error types for directory search

use crate::matrix::ErrorCode;
use thiserror::Error;

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The homeserver answered with an error other than "unrecognized"
    #[error("Homeserver rejected the directory search ({status} {errcode}): {error}")]
    Upstream {
        status: u16,
        errcode: ErrorCode,
        error: String,
    },

    /// Transport failure or a reply that could not be parsed
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DirectoryError {
    pub fn upstream(status: u16, errcode: ErrorCode, error: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            errcode,
            error: error.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
