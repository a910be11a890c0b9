//! Core domain types shared by every ipfs-upload crate

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default RPC address of a locally running node
pub const DEFAULT_API_ADDRESS: &str = "/ip4/127.0.0.1/tcp/5001";

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Endpoint Address
// ─────────────────────────────────────────────────────────────────────────────

/// A user-entered node address, either a multiaddr
/// (`/ip4/127.0.0.1/tcp/5001`) or a plain `http(s)://` URL.
///
/// No validation happens here. Resolution to an HTTP base URL is done by the
/// node client when a connection is attempted, so a malformed address surfaces
/// as a connection error rather than at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointAddress(String);

impl EndpointAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the address has no non-whitespace content
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Default for EndpointAddress {
    fn default() -> Self {
        Self(DEFAULT_API_ADDRESS.to_string())
    }
}

impl fmt::Display for EndpointAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EndpointAddress {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Content Identifier
// ─────────────────────────────────────────────────────────────────────────────

/// Canonical string form of a content identifier returned by the node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentIdentifier(String);

impl ContentIdentifier {
    pub fn new(cid: impl Into<String>) -> Self {
        Self(cid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public gateway link for this identifier.
    ///
    /// `gateway` is used as a prefix; a missing trailing slash is added.
    pub fn gateway_url(&self, gateway: &str) -> String {
        if gateway.ends_with('/') {
            format!("{gateway}{}", self.0)
        } else {
            format!("{gateway}/{}", self.0)
        }
    }
}

impl fmt::Display for ContentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Node Metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Attribute map returned by the node's `version` and `id` calls.
///
/// Keys are camelCase (`agentVersion`, `publicKey`), values are kept as raw
/// JSON so unknown attributes survive untouched.
pub type NodeMetadata = serde_json::Map<String, serde_json::Value>;

/// Which of the two metadata calls a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataKind {
    /// Result of `version()`
    Version,
    /// Result of `id()`
    Identity,
}

impl MetadataKind {
    /// Attribute names displayed for this kind of metadata
    pub fn display_keys(&self) -> &'static [&'static str] {
        match self {
            MetadataKind::Version => &["version"],
            MetadataKind::Identity => &["id", "agentVersion"],
        }
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataKind::Version => write!(f, "version"),
            MetadataKind::Identity => write!(f, "identity"),
        }
    }
}
