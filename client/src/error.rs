//! Client error taxonomy.
//!
//! Identifier and validation errors are raised synchronously while a
//! request is being built, before any network I/O. Transport and API
//! errors surface through the future returned by each operation.

use inkpost_id::IdError;
use inkpost_protocol::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A malformed identifier, detected locally.
    #[error("invalid identifier: {0}")]
    Id(#[from] IdError),

    /// A request that failed local validation at build time.
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// Connection or I/O failure talking to the API.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Failure reading a local file attached as an upload.
    #[error("failed to read upload file: {0}")]
    Io(#[from] std::io::Error),

    /// A non-2xx response, with the server's error body when it had one.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        status_code: Option<i64>,
    },
}

impl Error {
    /// Creates an API error from response details.
    pub fn api(status: u16, message: impl Into<String>, status_code: Option<i64>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            status_code,
        }
    }

    /// True for errors the server reported, as opposed to local or
    /// transport failures.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}
