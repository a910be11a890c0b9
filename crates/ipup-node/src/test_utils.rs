//! Test utilities for node types
//!
//! Provides a scriptable in-memory [`FakeNode`] and sample metadata builders.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ipup_core::prelude::*;
use ipup_core::{ContentIdentifier, NodeMetadata};
use serde_json::json;

use crate::add::{AddRequest, AddedEntry, ProgressFn, UploadStrategy};
use crate::node::StorageNode;

/// Sample `version()` response, already normalized
pub fn sample_version(version: &str) -> NodeMetadata {
    match json!({
        "version": version,
        "commit": "",
        "repo": "15",
        "system": "amd64/linux",
        "golang": "go1.22.4",
    }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Sample `id()` response, already normalized
pub fn sample_identity(peer_id: &str, agent: &str) -> NodeMetadata {
    match json!({
        "id": peer_id,
        "publicKey": "CAESIFake",
        "addresses": [format!("/ip4/127.0.0.1/tcp/4001/p2p/{peer_id}")],
        "agentVersion": agent,
        "protocolVersion": "ipfs/0.1.0",
        "protocols": ["/ipfs/bitswap/1.2.0"],
    }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Deterministic stand-in for the identifier a node would assign.
///
/// Raw uploads hash the bytes only; wrapped uploads also hash the path and use
/// a different prefix, so the two strategies never collide.
pub fn fake_cid(request: &AddRequest) -> ContentIdentifier {
    let mut hasher = DefaultHasher::new();
    match &request.strategy {
        UploadStrategy::Raw => {
            request.content.hash(&mut hasher);
            ContentIdentifier::new(format!("bafkfake{:016x}", hasher.finish()))
        }
        UploadStrategy::WrapWithDirectory { path } => {
            path.hash(&mut hasher);
            request.content.hash(&mut hasher);
            ContentIdentifier::new(format!("bafyfake{:016x}", hasher.finish()))
        }
    }
}

/// Call counters shared by every clone of a [`FakeNode`]
#[derive(Debug, Default)]
pub struct CallCounts {
    pub is_online: AtomicUsize,
    pub version: AtomicUsize,
    pub id: AtomicUsize,
    pub add: AtomicUsize,
}

/// Scriptable in-memory node.
///
/// Each operation answers with the configured value or fails with the
/// configured message.
#[derive(Debug, Clone)]
pub struct FakeNode {
    pub online: std::result::Result<bool, String>,
    pub version: std::result::Result<NodeMetadata, String>,
    pub identity: std::result::Result<NodeMetadata, String>,
    pub add_error: Option<String>,
    pub calls: Arc<CallCounts>,
}

impl Default for FakeNode {
    fn default() -> Self {
        Self {
            online: Ok(true),
            version: Ok(sample_version("0.29.0")),
            identity: Ok(sample_identity("12D3KooWFake", "kubo/0.29.0/")),
            add_error: None,
            calls: Arc::new(CallCounts::default()),
        }
    }
}

impl FakeNode {
    pub fn online() -> Self {
        Self::default()
    }

    pub fn offline() -> Self {
        Self {
            online: Ok(false),
            ..Self::default()
        }
    }

    pub fn unreachable(message: &str) -> Self {
        Self {
            online: Err(message.to_string()),
            version: Err(message.to_string()),
            identity: Err(message.to_string()),
            add_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_add_error(mut self, message: &str) -> Self {
        self.add_error = Some(message.to_string());
        self
    }

    pub fn count(&self, counter: fn(&CallCounts) -> &AtomicUsize) -> usize {
        counter(&self.calls).load(Ordering::SeqCst)
    }
}

impl StorageNode for FakeNode {
    async fn is_online(&self) -> Result<bool> {
        self.calls.is_online.fetch_add(1, Ordering::SeqCst);
        self.online.clone().map_err(Error::http)
    }

    async fn version(&self) -> Result<NodeMetadata> {
        self.calls.version.fetch_add(1, Ordering::SeqCst);
        self.version.clone().map_err(Error::http)
    }

    async fn id(&self) -> Result<NodeMetadata> {
        self.calls.id.fetch_add(1, Ordering::SeqCst);
        self.identity.clone().map_err(Error::http)
    }

    async fn add(&self, request: AddRequest, progress: Option<ProgressFn>) -> Result<AddedEntry> {
        self.calls.add.fetch_add(1, Ordering::SeqCst);

        if let Some(ref message) = self.add_error {
            return Err(Error::api(500, message.clone()));
        }
        if let Some(progress) = progress {
            progress(request.content.len() as u64);
        }

        Ok(AddedEntry {
            name: String::new(),
            cid: fake_cid(&request),
            size: Some(request.content.len() as u64),
        })
    }
}
