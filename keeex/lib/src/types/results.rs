//! Success payloads of individual operations.

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;
use super::Topic;

/// Body of a successful token exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Result of fingerprinting a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeeexResult {
    /// Path of the fingerprinted output file.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    /// The created topic.
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic: Topic,
}

/// Verification outcome codes.
///
/// Codes outside the documented set are kept in [`VerifiedStatus::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum VerifiedStatus {
    /// 100: registered and unmodified.
    Keeexed,
    /// 101: not registered.
    NotKeeexed,
    /// 102: registered but modified since.
    Modified,
    /// Any other code.
    Other(u16),
}

impl VerifiedStatus {
    /// Numeric code as sent by the service.
    pub fn code(self) -> u16 {
        self.into()
    }
}

impl From<u16> for VerifiedStatus {
    fn from(code: u16) -> Self {
        match code {
            100 => Self::Keeexed,
            101 => Self::NotKeeexed,
            102 => Self::Modified,
            other => Self::Other(other),
        }
    }
}

impl From<VerifiedStatus> for u16 {
    fn from(status: VerifiedStatus) -> Self {
        match status {
            VerifiedStatus::Keeexed => 100,
            VerifiedStatus::NotKeeexed => 101,
            VerifiedStatus::Modified => 102,
            VerifiedStatus::Other(code) => code,
        }
    }
}

/// Result of verifying a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResult {
    pub verified_status: VerifiedStatus,
    #[serde(default)]
    pub idx: Option<String>,
}

/// Profiles a topic was shared with and profiles that received it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedLists {
    #[serde(default, deserialize_with = "null_as_default")]
    pub received: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shared: Vec<String>,
}

/// Result of sharing a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub idx: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shared: SharedLists,
    /// Download link for the encrypted file.
    #[serde(default)]
    pub link: Option<String>,
}

/// Result of generating a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Path of the created file.
    #[serde(default, deserialize_with = "null_as_default")]
    pub file: String,
}

/// Topic currently displayed in the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentView {
    #[serde(default)]
    pub idx: Option<String>,
}

/// Value of an application variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvValue {
    #[serde(default)]
    pub value: Option<String>,
}
