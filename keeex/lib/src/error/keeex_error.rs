//! Top-level client error type.

use super::{ClientError, ConfigError, ValidationError};
use thiserror::Error;

/// Result alias used by every client operation.
pub type Result<T> = std::result::Result<T, KeeexError>;

/// Top-level error type for all client operations.
///
/// An operation either succeeds (HTTP 200) or fails with exactly one of
/// these variants.
///
/// ## Examples
///
/// ```rust,ignore
/// use keeex_lib::KeeexError;
///
/// fn report(err: KeeexError) {
///     match err {
///         KeeexError::Client(e) => eprintln!("request failed: {e}"),
///         KeeexError::Validation(e) => eprintln!("bad response: {e}"),
///         KeeexError::Config(e) => eprintln!("bad configuration: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum KeeexError {
    /// Transport error or non-200 HTTP status.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A 200 response whose body could not be decoded.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Invalid configuration or request parameters.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl KeeexError {
    /// Returns the HTTP status code when the server answered with something
    /// other than 200.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns `true` if the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Client(ClientError::Request(_)))
    }
}
