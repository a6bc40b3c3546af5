//! Presence validation for incoming field values.
//!
//! Every required field passes through one of these checks before it is
//! accepted onto a record, both at construction and on partial update. A
//! value that is absent, JSON `null`, an empty string, or an unassigned id
//! fails with [`CoreError::Validation`] naming the field.

use serde::{Deserialize, Deserializer};

use crate::error::CoreError;
use crate::types::DbId;

/// Require a non-empty string value for `field`.
pub fn require_text(field: &'static str, value: Option<String>) -> Result<String, CoreError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(CoreError::Validation(format!("{field} must be present"))),
    }
}

/// Require a referenced id for `field`.
///
/// Database ids start at 1, so zero and negative values count as missing.
pub fn require_id(field: &'static str, value: Option<DbId>) -> Result<DbId, CoreError> {
    match value {
        Some(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation(format!("{field} must be present"))),
    }
}

/// Validate a patched string field.
///
/// The outer `Option` records whether the key was present in the request
/// body at all; an absent key leaves the stored value untouched. A key that
/// is present must carry a non-empty string.
pub fn require_patched_text(
    field: &'static str,
    value: Option<Option<String>>,
) -> Result<Option<String>, CoreError> {
    value.map(|inner| require_text(field, inner)).transpose()
}

/// Deserialize a field so that an explicit `null` is distinguishable from an
/// absent key.
///
/// Use together with `#[serde(default)]`: an absent key yields `None`, a
/// `null` yields `Some(None)`, and a value yields `Some(Some(v))`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
