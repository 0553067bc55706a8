//! HTTP client module.
//!
//! [`KeeexClient`] owns the HTTP connection pool, the API root and the
//! session token. The per-operation methods live in [`crate::ops`].
//!
//! ## Examples
//!
//! ```rust,ignore
//! use keeex_lib::KeeexClient;
//!
//! let client = KeeexClient::new()?;
//! client.request_token("my-app").await?;
//! let me = client.me().await?;
//! ```

mod executor;

pub use executor::{KeeexClient, KeeexClientBuilder, NO_BODY};
