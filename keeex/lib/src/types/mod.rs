//! Data transfer records exchanged with the local API.
//!
//! All records are defined by the service. The client does not validate
//! them beyond decoding. A `null` where a value is expected decodes as empty;
//! [`Topic`] and [`User`] also keep explicit nulls and unknown fields (in
//! their `extra` maps) so results pass through unmodified.

mod env;
mod nullable;
mod options;
mod results;
mod topic;
mod user;

pub use env::{EnvVar, WritableEnvVar};
pub use options::{KeeexOptions, RefKind, SearchOptions, ShareOptions, VerifyOptions};
pub use results::{
    CurrentView, EnvValue, GeneratedFile, KeeexResult, ShareResult, SharedLists, TokenResponse,
    VerifiedStatus, VerifyResult,
};
pub use topic::{Comment, Timestamp, Topic, TopicLocation};
pub use user::User;
