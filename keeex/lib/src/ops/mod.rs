//! One method per remote operation, implemented on [`KeeexClient`].
//!
//! Every method issues exactly one request and resolves exactly once: with
//! the decoded body when the service answers 200, or with a
//! [`KeeexError`](crate::KeeexError) otherwise.
//!
//! [`KeeexClient`]: crate::KeeexClient

use serde::Serialize;

mod session;
mod topic;
mod user;
mod util;

/// `{idxs}` body shared by the bulk lookups.
#[derive(Debug, Serialize)]
struct IdxsRequest<'a> {
    idxs: &'a [String],
}
