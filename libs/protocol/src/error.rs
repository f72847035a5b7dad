//! Local request-validation errors.

use thiserror::Error;

/// Errors raised synchronously while building a request, before any
/// network I/O happens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required builder field was never set.
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    /// A field was set to a value the API cannot accept.
    #[error("field '{field}' is invalid: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    /// Creates an invalid-field error.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }
}
