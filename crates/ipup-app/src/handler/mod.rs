//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers

pub(crate) mod keys;
pub(crate) mod update;


use ipup_core::EndpointAddress;
use ipup_node::{ClientHandle, ClientOptions};

use crate::message::Message;
use crate::ticket::{ConnectionId, UploadTicket};
use crate::upload::FileSelection;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Build a client for `address` and run the liveness check
    Connect {
        attempt: ConnectionId,
        address: EndpointAddress,
        options: ClientOptions,
    },

    /// Fetch version and identity info for a freshly installed handle.
    /// The two calls run independently.
    FetchMetadata {
        connection: ConnectionId,
        client: ClientHandle,
    },

    /// Upload the first file of `selection` through `client`
    Upload {
        ticket: UploadTicket,
        client: ClientHandle,
        selection: FileSelection,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
