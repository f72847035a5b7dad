//! Error types for identifier parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The identifier string is empty.
    #[error("identifier cannot be empty")]
    Empty,

    /// The identifier does not split into exactly two non-empty segments
    /// on the underscore separator.
    #[error("identifier must contain exactly one underscore separator")]
    MissingSeparator,

    /// The identifier has the wrong total length.
    #[error("identifier must be {expected} characters long, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// The prefix segment does not name any known resource kind.
    #[error("'{0}' is not a known identifier prefix")]
    UnknownPrefix(String),

    /// The prefix segment names a different resource kind than expected.
    #[error("wrong identifier prefix: expected '{expected}', got '{actual}'")]
    PrefixMismatch {
        expected: &'static str,
        actual: String,
    },

    /// The suffix segment is not lowercase hex.
    #[error("identifier suffix '{0}' is not lowercase hex")]
    InvalidSuffix(String),

    /// The identifier format is invalid.
    #[error("invalid identifier format: {message}")]
    InvalidFormat { message: String },
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error indicates a prefix problem.
    pub fn is_prefix_error(&self) -> bool {
        matches!(
            self,
            IdError::UnknownPrefix(_) | IdError::PrefixMismatch { .. }
        )
    }
}
