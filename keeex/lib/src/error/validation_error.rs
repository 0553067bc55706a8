//! Response decoding errors.

use thiserror::Error;

/// Errors decoding a successful (HTTP 200) response body.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The body is not JSON of the expected shape.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
