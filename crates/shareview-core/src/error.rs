//! Centralized error types for Shareview.

use thiserror::Error;

/// Main error type for Shareview operations.
#[derive(Error, Debug)]
pub enum ShareviewError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Prompt must not be empty")]
    EmptyPrompt,
}

/// Result type for Shareview operations.
pub type ShareviewResult<T> = Result<T, ShareviewError>;

impl ShareviewError {
    /// Create a configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
