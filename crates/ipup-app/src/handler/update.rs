//! Main update function - handles state transitions (TEA pattern)

use std::path::PathBuf;

use ipup_core::prelude::*;
use ipup_core::{AppPhase, EndpointAddress, MetadataKind};

use crate::message::Message;
use crate::state::{AppState, Focus};
use crate::text_field::FieldEdit;
use crate::upload::FileSelection;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Shown in the connect form when `behavior.report_offline` is set
pub const OFFLINE_MESSAGE: &str = "Node is offline";

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Paste(text) => {
            let field = match state.focus {
                Focus::Address => &mut state.connect.address,
                Focus::FilePath if state.is_connected() => &mut state.upload.path,
                _ => return UpdateResult::none(),
            };
            for c in text.chars() {
                field.apply(FieldEdit::Insert(c));
            }
            UpdateResult::none()
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Form navigation
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus_previous();
            UpdateResult::none()
        }

        Message::FieldInput { field, edit } => {
            match field {
                Focus::Address => state.connect.address.apply(edit),
                Focus::FilePath if state.is_connected() => state.upload.path.apply(edit),
                _ => {}
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Connection
        // ─────────────────────────────────────────────────────────
        Message::Connect => handle_connect(state),

        Message::ConnectSucceeded { attempt, client } => {
            if !state.is_latest_attempt(attempt) {
                debug!("Ignoring result of superseded connection attempt {}", attempt);
                return UpdateResult::none();
            }

            info!("Connected to {} ({})", client.address(), attempt);
            state.install_handle(attempt, client.clone());
            UpdateResult::action(UpdateAction::FetchMetadata {
                connection: attempt,
                client,
            })
        }

        Message::NodeOffline { attempt } => {
            if !state.is_latest_attempt(attempt) {
                return UpdateResult::none();
            }

            state.connect.connecting = false;
            if state.settings.behavior.report_offline {
                state.connect.error = Some(OFFLINE_MESSAGE.to_string());
            }
            UpdateResult::none()
        }

        Message::ConnectFailed { attempt, error } => {
            if !state.is_latest_attempt(attempt) {
                debug!("Ignoring failure of superseded connection attempt {}", attempt);
                return UpdateResult::none();
            }

            state.connect.connecting = false;
            state.connect.error = Some(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Metadata
        // ─────────────────────────────────────────────────────────
        Message::MetadataFetched {
            connection,
            kind,
            metadata,
        } => {
            match state.node_for(connection) {
                Some(node) => match kind {
                    MetadataKind::Version => node.version = Some(metadata),
                    MetadataKind::Identity => node.identity = Some(metadata),
                },
                None => debug!("Dropping {} metadata for replaced {}", kind, connection),
            }
            UpdateResult::none()
        }

        Message::MetadataFetchFailed {
            connection,
            kind,
            error,
        } => {
            match state.node_for(connection) {
                Some(node) => node.metadata_error = Some(error),
                None => debug!("Dropping {} failure for replaced {}", kind, connection),
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Upload
        // ─────────────────────────────────────────────────────────
        Message::ToggleKeepFilename => {
            if state.is_connected() {
                state.upload.keep_filename = !state.upload.keep_filename;
            }
            UpdateResult::none()
        }

        Message::SubmitUpload => {
            if !state.is_connected() || state.upload.path.is_blank() {
                return UpdateResult::none();
            }
            let path = PathBuf::from(state.upload.path.value().trim());
            UpdateResult::message(Message::FilesSelected { files: vec![path] })
        }

        Message::FilesSelected { files } => handle_files_selected(state, files),

        Message::UploadCompleted { ticket, cid } => {
            if !state.is_latest_upload(ticket) {
                debug!("Ignoring result of superseded {}", ticket);
                return UpdateResult::none();
            }

            state.upload.uploading = false;
            if let Some(cid) = cid {
                state.upload.cid = Some(cid);
                state.upload.error = None;
            }
            UpdateResult::none()
        }

        Message::UploadFailed { ticket, error } => {
            if !state.is_latest_upload(ticket) {
                debug!("Ignoring failure of superseded {}", ticket);
                return UpdateResult::none();
            }

            state.upload.uploading = false;
            state.upload.error = Some(error);
            UpdateResult::none()
        }
    }
}

fn handle_connect(state: &mut AppState) -> UpdateResult {
    if state.connect.address.is_blank() {
        debug!("Connect submitted with an empty address");
        return UpdateResult::none();
    }

    let address = EndpointAddress::new(state.connect.address.value().trim());
    let attempt = state.begin_connect();
    debug!("Connecting to {} ({})", address, attempt);

    UpdateResult::action(UpdateAction::Connect {
        attempt,
        address,
        options: state.settings.client_options(),
    })
}

fn handle_files_selected(state: &mut AppState, files: Vec<PathBuf>) -> UpdateResult {
    if files.is_empty() {
        return UpdateResult::none();
    }

    let Some(client) = state.node.as_ref().map(|node| node.client.clone()) else {
        warn!("Upload requested without a connected node");
        return UpdateResult::none();
    };

    let selection = FileSelection::new(files, state.upload.keep_filename);
    let ticket = state.begin_upload();
    debug!("Submitting {:?} ({})", selection.first(), ticket);

    UpdateResult::action(UpdateAction::Upload {
        ticket,
        client,
        selection,
    })
}
