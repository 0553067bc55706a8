//! Option blocks sent with requests.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Options for fingerprinting a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeeexOptions {
    /// Topic name; also sent at the top level of the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Folder for the output file. The service default is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_folder: Option<String>,
    /// Record the local creation time and request a blockchain timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<bool>,
    /// Put the output filename pattern into the metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<bool>,
    /// Put the bitcoin signature into the metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitcoin: Option<bool>,
}

/// Options for verifying a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyOptions {
    /// Add the verified file to the local database when valid.
    pub import: bool,
}

/// Options for sharing a topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareOptions {
    /// Send an e-mail to the recipients.
    pub email: bool,
}

/// Search filters. Unset flags are left out of the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<bool>,
    /// Agreements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concept: Option<bool>,
    /// Include superseded versions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub older_version: Option<bool>,
    /// Match the filter against descriptions too.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<bool>,
}

impl SearchOptions {
    /// Only documents.
    pub fn documents() -> Self {
        Self {
            document: Some(true),
            ..Self::default()
        }
    }
}

/// Kind of link created by `make_ref`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RefKind {
    /// `to` references `from`.
    Reference,
    /// `to` is a new version of `from`.
    Version,
    /// The current user agrees with `to`; `from` is unused.
    Agreement,
}
