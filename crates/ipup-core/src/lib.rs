//! # ipup-core - Core Domain Types
//!
//! Foundation crate for ipfs-upload. Provides domain types, error handling,
//! logging setup and the metadata presenter.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`EndpointAddress`] - User-entered node address (multiaddr or URL)
//! - [`ContentIdentifier`] - Canonical CID string returned by an upload
//! - [`NodeMetadata`] - Attribute map from the node's `version`/`id` calls
//! - [`MetadataKind`] - Which metadata call a value came from
//! - [`AppPhase`] - Running vs quitting
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with a `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Details (`details`)
//! - [`render_details()`] - Project metadata attributes into label/value rows
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ipup_core::prelude::*;
//! ```

pub mod details;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all ipfs-upload crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use details::{display_value, render_details, DetailRow};
pub use error::{Error, Result, ResultExt};
pub use types::{
    AppPhase, ContentIdentifier, EndpointAddress, MetadataKind, NodeMetadata, DEFAULT_API_ADDRESS,
};
