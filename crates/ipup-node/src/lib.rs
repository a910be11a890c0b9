//! # ipup-node - Storage Node RPC Client
//!
//! Talks to a local IPFS-style storage node over its HTTP RPC API
//! (`/api/v0/...`): liveness check, `version`, `id` and `add`.
//!
//! Depends on [`ipup_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Client
//! - [`NodeClient`] - Client bound to one node address
//! - [`ClientHandle`] - Shared handle to a client that passed its liveness check
//! - [`ClientOptions`] - Construction options (request timeout)
//! - [`resolve_api_url()`] - Multiaddr / URL to RPC base URL
//!
//! ### Node Surface
//! - [`StorageNode`] - The operations the front-end relies on (`Send` futures)
//! - [`LocalStorageNode`] - Same trait without the `Send` bound
//!
//! ### Uploads
//! - [`AddRequest`], [`UploadStrategy`] - What to store and how
//! - [`AddedEntry`] - What the node stored
//! - [`AddResponseParser`] - Incremental parser for the NDJSON `add` response

pub mod add;
pub mod address;
pub mod client;
pub mod metadata;
pub mod node;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use add::{AddEvent, AddRequest, AddResponseParser, AddedEntry, ProgressFn, UploadStrategy};
pub use address::resolve_api_url;
pub use client::{ClientHandle, ClientOptions, NodeClient};
pub use metadata::{has_addresses, normalize_keys, parse_metadata};
pub use node::{LocalStorageNode, StorageNode};
