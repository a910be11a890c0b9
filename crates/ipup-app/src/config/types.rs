//! Configuration types for ipfs-upload
//!
//! Defines `Settings` (the `config.toml` contents) and its sections.

use std::time::Duration;

use ipup_core::{EndpointAddress, DEFAULT_API_ADDRESS};
use ipup_node::ClientOptions;
use serde::{Deserialize, Serialize};

/// Default public gateway used to build shareable links
pub const DEFAULT_GATEWAY_URL: &str = "https://ipfs.io/ipfs/";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub node: NodeSettings,

    #[serde(default)]
    pub upload: UploadSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

impl Settings {
    /// Options for building node clients
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self
                .node
                .request_timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

/// Node connection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeSettings {
    /// Address prefilled in the connect form
    #[serde(default = "default_api_address")]
    pub api_address: EndpointAddress,

    /// Per-request timeout. Unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self {
            api_address: default_api_address(),
            request_timeout_secs: None,
        }
    }
}

fn default_api_address() -> EndpointAddress {
    EndpointAddress::new(DEFAULT_API_ADDRESS)
}

/// Upload settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadSettings {
    /// Initial state of the "Keep Filename" checkbox
    #[serde(default)]
    pub keep_filename: bool,

    /// Gateway prefix for the link shown next to an uploaded CID
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            keep_filename: false,
            gateway_url: default_gateway_url(),
        }
    }
}

fn default_gateway_url() -> String {
    DEFAULT_GATEWAY_URL.to_string()
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Connect to `node.api_address` on startup
    #[serde(default)]
    pub auto_connect: bool,

    /// Show "Node is offline" when the node answers but reports no addresses.
    /// Off by default: an offline node leaves the form untouched.
    #[serde(default)]
    pub report_offline: bool,
}
