use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::nullable::{keep_null, null_as_default, present};

/// A user profile.
///
/// Modelled fields other than `profile_idx` keep an explicit `null` as
/// `Some(None)`, like [`Topic`](super::Topic).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile_idx: String,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    /// Path of the avatar image.
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Option<String>>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn name(&self) -> &str {
        present(&self.name).map_or("", String::as_str)
    }

    pub fn avatar(&self) -> &str {
        present(&self.avatar).map_or("", String::as_str)
    }

    pub fn email(&self) -> &str {
        present(&self.email).map_or("", String::as_str)
    }
}
