//! The minimal node surface the front-end relies on
//!
//! Implemented by [`crate::NodeClient`] against a real node, and by
//! `test_utils::FakeNode` in tests.

use ipup_core::prelude::*;
use ipup_core::NodeMetadata;

use crate::add::{AddRequest, AddedEntry, ProgressFn};

#[trait_variant::make(StorageNode: Send)]
pub trait LocalStorageNode {
    /// Liveness check. `Ok(false)` means the node answered but reports
    /// itself offline.
    async fn is_online(&self) -> Result<bool>;

    /// Node software version info (`version`, `commit`, `repo`, ...)
    async fn version(&self) -> Result<NodeMetadata>;

    /// Node identity info (`id`, `agentVersion`, `addresses`, ...)
    async fn id(&self) -> Result<NodeMetadata>;

    /// Store content and return the final entry the node reports.
    ///
    /// `progress` receives byte counts as the node reports them.
    async fn add(&self, request: AddRequest, progress: Option<ProgressFn>) -> Result<AddedEntry>;
}
