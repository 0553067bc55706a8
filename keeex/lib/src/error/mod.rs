//! Layered error types for the KeeeX client.
//!
//! - [`KeeexError`] - Top-level error returned by every operation
//! - [`ClientError`] - Transport failures and non-200 responses
//! - [`ValidationError`] - Success bodies that do not decode
//! - [`ConfigError`] - Client configuration and request construction errors

mod client_error;
mod config_error;
mod keeex_error;
mod validation_error;

pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use keeex_error::{KeeexError, Result};
pub use validation_error::ValidationError;
