//! Label/value projection of node metadata
//!
//! [`render_details`] is a pure function: given an optional metadata map and
//! an ordered list of attribute names, it yields one [`DetailRow`] per name.
//! An absent map or an empty key list yields nothing. A key that is not in the
//! map is an error, returned rather than panicking so the caller can decide
//! how to show it.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::NodeMetadata;

/// One rendered attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Project `keys` out of `obj`, in the order given.
///
/// Returns an empty list when `obj` is `None` or `keys` is empty.
/// Returns [`Error::MissingKey`] for the first key that `obj` does not contain.
pub fn render_details(obj: Option<&NodeMetadata>, keys: &[&str]) -> Result<Vec<DetailRow>> {
    let Some(obj) = obj else {
        return Ok(Vec::new());
    };

    keys.iter()
        .map(|key| {
            obj.get(*key)
                .map(|value| DetailRow::new(*key, display_value(value)))
                .ok_or_else(|| Error::missing_key(*key))
        })
        .collect()
}

/// String form of a metadata value.
///
/// Strings are shown unquoted and arrays are comma-joined; everything else
/// uses compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
