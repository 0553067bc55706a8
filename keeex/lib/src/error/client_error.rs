//! Transport and HTTP status errors.

use thiserror::Error;

/// Errors from the HTTP layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (name resolution, connection
    /// refused, timeout, broken body stream).
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The server answered with a status other than 200.
    ///
    /// The message is the numeric status followed by the raw body. No
    /// structured error code is extracted from the body.
    #[error("{status} {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl ClientError {
    /// Returns the HTTP status code if this is an HTTP status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(_) => None,
        }
    }

    /// Returns the raw response body if this is an HTTP status error.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { body, .. } => Some(body),
            Self::Request(_) => None,
        }
    }
}
