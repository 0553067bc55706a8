//! Topics: documents, discussions, comments and concepts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::nullable::{keep_null, null_as_default, present};

/// A point in time as reported by the service.
///
/// The service reports epoch milliseconds; textual dates are accepted as
/// well and kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// Any other textual representation.
    Text(String),
}

impl Timestamp {
    /// Converts to a UTC date-time when the value is epoch millis or RFC 3339.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Millis(ms) => DateTime::<Utc>::from_timestamp_millis(*ms),
            Self::Text(text) => DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

/// A content-addressed unit identified by its `idx`.
///
/// Apart from `idx`, modelled fields are `None` when absent and `Some(None)`
/// when the service sent `null`; the accessors treat both as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    /// Stable content identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub idx: String,
    /// Title, or the message text for comments.
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub last_modify: Option<Option<Timestamp>>,
    /// Identifiers of referenced topics.
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub references: Option<Option<Vec<String>>>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Topic {
    /// Title, or empty.
    pub fn name(&self) -> &str {
        present(&self.name).map_or("", String::as_str)
    }

    /// Description, or empty.
    pub fn description(&self) -> &str {
        present(&self.description).map_or("", String::as_str)
    }

    pub fn creation_date(&self) -> Option<&Timestamp> {
        present(&self.creation_date)
    }

    pub fn last_modify(&self) -> Option<&Timestamp> {
        present(&self.last_modify)
    }

    /// Referenced topic identifiers, or empty.
    pub fn references(&self) -> &[String] {
        present(&self.references).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Comments are topics whose `name` holds the message text.
pub type Comment = Topic;

/// Known locations of a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicLocation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub idx: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: Vec<String>,
}
