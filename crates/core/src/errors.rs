//! Core error types for the dashboard engine.
//!
//! Ratio computations never fail (they fall back to zero), so the only
//! errors surfaced here are input validation and questionnaire contract
//! violations.

use thiserror::Error;

use crate::risk::RiskError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Risk questionnaire error: {0}")]
    Risk(#[from] RiskError),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Please fill all password fields.")]
    MissingPasswordFields,

    #[error("New password must be at least {min} characters.")]
    PasswordTooShort { min: usize },

    #[error("New password and confirm password do not match.")]
    PasswordMismatch,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<chrono::ParseError> for ValidationError {
    fn from(err: chrono::ParseError) -> Self {
        ValidationError::DateTimeParse(err.to_string())
    }
}
