//! Serde helpers for fields the service may send as JSON `null`.

use serde::{Deserialize, Deserializer};

/// Decodes `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so an absent field defaults as well.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a present field into `Some`, keeping an explicit `null` as
/// `Some(None)`.
///
/// Pair with `#[serde(default, skip_serializing_if = "Option::is_none")]`:
/// an absent field stays `None` and is not written back, while `null` is.
pub(crate) fn keep_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Value of a [`keep_null`] field, treating absent and `null` alike.
pub(crate) fn present<T>(field: &Option<Option<T>>) -> Option<&T> {
    field.as_ref().and_then(Option::as_ref)
}
