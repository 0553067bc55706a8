//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration or request construction.
///
/// These never involve the network; they are reported through the same
/// `Result` as every other failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL cannot carry path segments (e.g. `mailto:`).
    #[error("URL cannot be used as an API root: {url}")]
    CannotBeABase {
        /// The offending URL.
        url: String,
    },

    /// The port could not be applied to the base URL.
    #[error("Invalid port for {url}")]
    InvalidPort {
        /// The URL the port was applied to.
        url: String,
    },

    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value for {name}: {value}")]
    InvalidEnvValue {
        /// Variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A path parameter would not map to a single path segment.
    #[error("Invalid path parameter: {segment:?}")]
    InvalidPathSegment {
        /// The rejected value.
        segment: String,
    },

    /// The token contains characters not allowed in an HTTP header.
    #[error("Token is not a valid header value")]
    InvalidToken,

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ConfigError {
    /// Creates an invalid environment value error.
    pub fn invalid_env(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnvValue {
            name,
            value: value.into(),
        }
    }
}
