//! Error handling module for formrelay
//!
//! This module defines the error types used throughout the crate,
//! providing a unified error handling strategy. Validation failures are
//! user-correctable and surfaced as form feedback; submission failures
//! are retryable without losing the user's input.

use thiserror::Error;

/// Result type alias for formrelay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for formrelay
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors for form input (field-level or aggregate)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A submission was attempted while another one is in flight
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// The backend send operation failed
    #[error("Submission failed: {0}")]
    Submission(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a submission error
    pub fn submission<S: Into<String>>(msg: S) -> Self {
        Error::Submission(msg.into())
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }

    /// Check if the user can correct this error and resubmit the form
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::SubmissionInProgress)
    }

    /// Check if this error is retryable without changing the form input
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Submission(_) | Error::SubmissionInProgress)
    }

    /// Check if field values should be kept after this error, so the user
    /// can retry without retyping
    pub fn preserves_input(&self) -> bool {
        !matches!(self, Error::Config(_) | Error::Internal(_))
    }
}

/// Convert from envconfig::Error to our Error type
impl From<envconfig::Error> for Error {
    fn from(err: envconfig::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_correctable() {
        assert!(Error::validation("missing email").is_user_correctable());
        assert!(Error::SubmissionInProgress.is_user_correctable());
        assert!(!Error::submission("backend down").is_user_correctable());
        assert!(!Error::config("bad delay").is_user_correctable());
    }

    #[test]
    fn test_error_retryable() {
        assert!(Error::submission("timeout").is_retryable());
        assert!(Error::SubmissionInProgress.is_retryable());
        assert!(!Error::validation("bad phone").is_retryable());
    }

    #[test]
    fn test_error_preserves_input() {
        assert!(Error::validation("bad phone").preserves_input());
        assert!(Error::submission("backend down").preserves_input());
        assert!(!Error::internal("bug").preserves_input());
    }

    #[test]
    fn test_error_display() {
        let err = Error::validation("Please fill in all required fields");
        assert_eq!(
            err.to_string(),
            "Validation error: Please fill in all required fields"
        );
        assert_eq!(
            Error::SubmissionInProgress.to_string(),
            "A submission is already in progress"
        );
    }
}
