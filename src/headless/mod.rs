//! Headless mode - NDJSON event output instead of the TUI
//!
//! Connects to the configured node, reports its details, uploads the files
//! given on the command line one at a time, then exits.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"connected","address":"/ip4/127.0.0.1/tcp/5001","timestamp":1704700001000}
//! {"event":"node_info","kind":"version","details":{"version":"0.29.0"},"timestamp":1704700001020}
//! {"event":"upload_completed","file":"photo.png","cid":"bafkrei…","gateway_url":"https://ipfs.io/ipfs/bafkrei…","timestamp":1704700002000}
//! ```

pub mod runner;

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;
use ipup_core::{ContentIdentifier, DetailRow, MetadataKind};
use serde::Serialize;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Liveness check passed and a node handle is installed
    Connected { address: String, timestamp: i64 },

    /// Node answered but reports no swarm addresses
    NodeOffline { address: String, timestamp: i64 },

    ConnectionFailed {
        address: String,
        error: String,
        timestamp: i64,
    },

    /// Label/value rows of one metadata call
    NodeInfo {
        kind: String,
        details: BTreeMap<String, String>,
        timestamp: i64,
    },

    MetadataFailed {
        kind: String,
        error: String,
        timestamp: i64,
    },

    UploadStarted { file: String, timestamp: i64 },

    /// `cid` is absent when the node answered without an entry
    UploadCompleted {
        file: String,
        cid: Option<String>,
        gateway_url: Option<String>,
        timestamp: i64,
    },

    UploadFailed {
        file: String,
        error: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn connected(address: &str) -> Self {
        Self::Connected {
            address: address.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn node_offline(address: &str) -> Self {
        Self::NodeOffline {
            address: address.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn connection_failed(address: &str, error: String) -> Self {
        Self::ConnectionFailed {
            address: address.to_string(),
            error,
            timestamp: Self::now(),
        }
    }

    pub fn node_info(kind: MetadataKind, rows: Vec<DetailRow>) -> Self {
        Self::NodeInfo {
            kind: kind.to_string(),
            details: rows.into_iter().map(|row| (row.label, row.value)).collect(),
            timestamp: Self::now(),
        }
    }

    pub fn metadata_failed(kind: MetadataKind, error: String) -> Self {
        Self::MetadataFailed {
            kind: kind.to_string(),
            error,
            timestamp: Self::now(),
        }
    }

    pub fn upload_started(file: &Path) -> Self {
        Self::UploadStarted {
            file: file.display().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn upload_completed(
        file: &Path,
        cid: Option<&ContentIdentifier>,
        gateway_url: Option<String>,
    ) -> Self {
        Self::UploadCompleted {
            file: file.display().to_string(),
            cid: cid.map(|c| c.as_str().to_string()),
            gateway_url,
            timestamp: Self::now(),
        }
    }

    pub fn upload_failed(file: &Path, error: String) -> Self {
        Self::UploadFailed {
            file: file.display().to_string(),
            error,
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_connected_serialization() {
        let value = to_value(&HeadlessEvent::connected("/ip4/127.0.0.1/tcp/5001"));

        assert_eq!(value["event"], "connected");
        assert_eq!(value["address"], "/ip4/127.0.0.1/tcp/5001");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_node_info_serialization() {
        let rows = vec![
            DetailRow::new("id", "12D3KooWTest"),
            DetailRow::new("agentVersion", "kubo/0.29.0/"),
        ];
        let value = to_value(&HeadlessEvent::node_info(MetadataKind::Identity, rows));

        assert_eq!(value["event"], "node_info");
        assert_eq!(value["kind"], "identity");
        assert_eq!(value["details"]["id"], "12D3KooWTest");
        assert_eq!(value["details"]["agentVersion"], "kubo/0.29.0/");
    }

    #[test]
    fn test_upload_completed_serialization() {
        let cid = ContentIdentifier::new("bafkreitest");
        let event = HeadlessEvent::upload_completed(
            Path::new("photo.png"),
            Some(&cid),
            Some("https://ipfs.io/ipfs/bafkreitest".into()),
        );
        let value = to_value(&event);

        assert_eq!(value["event"], "upload_completed");
        assert_eq!(value["file"], "photo.png");
        assert_eq!(value["cid"], "bafkreitest");
        assert_eq!(value["gateway_url"], "https://ipfs.io/ipfs/bafkreitest");
    }

    #[test]
    fn test_upload_completed_without_cid() {
        let value = to_value(&HeadlessEvent::upload_completed(
            Path::new("empty.bin"),
            None,
            None,
        ));
        assert!(value["cid"].is_null());
    }

    #[test]
    fn test_write_to_emits_one_line() {
        let mut out = Vec::new();
        HeadlessEvent::upload_failed(Path::new("a.txt"), "file does not exist".into())
            .write_to(&mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("\"event\":\"upload_failed\""));
    }
}
