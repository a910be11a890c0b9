//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use ipup_core::{ContentIdentifier, MetadataKind, NodeMetadata};
use ipup_node::ClientHandle;

use crate::input_key::InputKey;
use crate::state::Focus;
use crate::text_field::FieldEdit;
use crate::ticket::{ConnectionId, UploadTicket};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Text pasted into the terminal, inserted into the focused field
    Paste(String),

    /// Tick for periodic updates
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form navigation
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,

    /// Edit the text field with the given focus target
    FieldInput { field: Focus, edit: FieldEdit },

    // ─────────────────────────────────────────────────────────
    // Connection
    // ─────────────────────────────────────────────────────────
    /// Submit the connect form
    Connect,

    /// Liveness check passed; `client` is ready to publish
    ConnectSucceeded {
        attempt: ConnectionId,
        client: ClientHandle,
    },

    /// Node answered but reports itself offline
    NodeOffline { attempt: ConnectionId },

    ConnectFailed {
        attempt: ConnectionId,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Metadata
    // ─────────────────────────────────────────────────────────
    MetadataFetched {
        connection: ConnectionId,
        kind: MetadataKind,
        metadata: NodeMetadata,
    },

    MetadataFetchFailed {
        connection: ConnectionId,
        kind: MetadataKind,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Upload
    // ─────────────────────────────────────────────────────────
    ToggleKeepFilename,

    /// Submit the path typed in the upload form
    SubmitUpload,

    /// A new selection replaces the previous one and starts an upload
    FilesSelected { files: Vec<PathBuf> },

    UploadCompleted {
        ticket: UploadTicket,
        cid: Option<ContentIdentifier>,
    },

    UploadFailed {
        ticket: UploadTicket,
        error: String,
    },
}
