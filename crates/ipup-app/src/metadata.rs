//! Fetching node metadata

use ipup_core::prelude::*;
use ipup_core::{MetadataKind, NodeMetadata};
use ipup_node::StorageNode;

/// Call `version()` or `id()` on `node`.
///
/// Failures are mapped to [`Error::MetadataFetch`] tagged with `kind`.
pub async fn fetch<N: StorageNode>(node: &N, kind: MetadataKind) -> Result<NodeMetadata> {
    let result = match kind {
        MetadataKind::Version => node.version().await,
        MetadataKind::Identity => node.id().await,
    };

    result.map_err(|e| {
        warn!("Failed to fetch {} metadata: {}", kind, e);
        Error::metadata_fetch(kind, e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipup_node::test_utils::FakeNode;

    #[tokio::test]
    async fn test_fetch_each_kind_calls_its_endpoint() {
        let node = FakeNode::online();

        let version = fetch(&node, MetadataKind::Version).await.unwrap();
        assert_eq!(version["version"], "0.29.0");

        let identity = fetch(&node, MetadataKind::Identity).await.unwrap();
        assert_eq!(identity["id"], "12D3KooWFake");

        assert_eq!(node.count(|c| &c.version), 1);
        assert_eq!(node.count(|c| &c.id), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_tagged() {
        let node = FakeNode::unreachable("timeout");
        let err = fetch(&node, MetadataKind::Identity).await.unwrap_err();
        match err {
            Error::MetadataFetch { kind, message } => {
                assert_eq!(kind, MetadataKind::Identity);
                assert_eq!(message, "timeout");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
