//! Typed async client for the KeeeX local REST API.
//!
//! The KeeeX desktop application exposes an HTTP/JSON API on
//! `http://localhost:8288/kx/api` for fingerprinting, verifying, annotating
//! and sharing documents. This crate wraps every route of that API in one
//! async method on [`KeeexClient`].
//!
//! ## Features
//!
//! - **One method per route**: typed request parameters and response records
//! - **Per-client token**: stored automatically after a token exchange
//! - **Uniform errors**: HTTP 200 is success, every other status is an error
//!   carrying the status code and raw body
//! - **Tracing**: one span per request with method, URL and status
//!
//! ## Example
//!
//! ```rust,ignore
//! use keeex_lib::{KeeexClient, SearchOptions};
//!
//! let client = KeeexClient::new()?;
//! client.request_token("my-app").await?;
//!
//! let found = client
//!     .search("invoice", &[], &[], 0, 10, SearchOptions::documents())
//!     .await?;
//! for topic in found {
//!     println!("{} {}", topic.idx, topic.name());
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod method;
mod ops;
pub mod response;
pub mod route;
pub mod types;

// Re-exports for convenience
pub use client::{KeeexClient, KeeexClientBuilder, NO_BODY};
pub use config::ClientConfig;
pub use error::{ClientError, ConfigError, KeeexError, Result, ValidationError};
pub use method::RestMethod;
pub use route::{Route, RouteGroup};
pub use types::*;
