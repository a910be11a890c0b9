//! Connecting to a node
//!
//! A handle is published only after the node passes its liveness check.

use std::sync::Arc;

use ipup_core::prelude::*;
use ipup_core::EndpointAddress;
use ipup_node::{ClientHandle, ClientOptions, NodeClient, StorageNode};

/// Build a client for `address` and check that it is live.
///
/// - `Ok(Some(handle))`: the node is online.
/// - `Ok(None)`: the node answered but reports itself offline.
/// - `Err(Error::Connection)`: construction or the liveness check failed; the message
///   is the underlying failure text.
pub async fn attempt_connect(
    address: &EndpointAddress,
    options: &ClientOptions,
) -> Result<Option<ClientHandle>> {
    let client = NodeClient::new(address, options).map_err(|e| {
        warn!("Cannot build client for {}: {}", address, e);
        Error::connection(e.to_string())
    })?;

    Ok(check_liveness(client).await?.map(Arc::new))
}

/// Run the liveness check against `node`, handing it back if online
pub async fn check_liveness<N: StorageNode>(node: N) -> Result<Option<N>> {
    match node.is_online().await {
        Ok(true) => Ok(Some(node)),
        Ok(false) => {
            warn!("Node answered but is not online");
            Ok(None)
        }
        Err(e) => {
            warn!("Liveness check failed: {}", e);
            Err(Error::connection(e.to_string()))
        }
    }
}
