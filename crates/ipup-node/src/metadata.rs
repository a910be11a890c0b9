//! Normalization of `version` / `id` responses
//!
//! The node returns PascalCase keys (`AgentVersion`, `ID`). The UI and the
//! presenter work with camelCase names (`agentVersion`, `id`).

use ipup_core::prelude::*;
use ipup_core::NodeMetadata;
use serde_json::Value;

/// Convert a PascalCase key to camelCase.
///
/// A leading run of capitals is lowercased as a unit, keeping the last one
/// when it starts the next word: `ID` → `id`, `HTTPPort` → `httpPort`.
pub fn to_camel_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let upper_run = chars.iter().take_while(|c| c.is_uppercase()).count();

    let lower_count = match upper_run {
        0 => return key.to_string(),
        n if n == chars.len() => n,
        1 => 1,
        n => n - 1,
    };

    chars
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i < lower_count {
                c.to_lowercase().next().unwrap_or(*c)
            } else {
                *c
            }
        })
        .collect()
}

/// Rename every top-level key to camelCase
pub fn normalize_keys(map: NodeMetadata) -> NodeMetadata {
    map.into_iter()
        .map(|(key, value)| (to_camel_case(&key), value))
        .collect()
}

/// Parse a metadata response body into a normalized map
pub fn parse_metadata(body: &str) -> Result<NodeMetadata> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => Ok(normalize_keys(map)),
        other => Err(Error::protocol(format!(
            "expected a JSON object, got {}",
            type_name(&other)
        ))),
    }
}

/// Whether an identity map lists at least one listen address.
///
/// This is the liveness rule: a node that answers `id` but has no addresses
/// is reachable yet not online.
pub fn has_addresses(identity: &NodeMetadata) -> bool {
    matches!(identity.get("addresses"), Some(Value::Array(addrs)) if !addrs.is_empty())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
