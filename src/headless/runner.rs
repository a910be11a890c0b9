//! Headless mode runner - main event loop without TUI
//!
//! Drives the same Engine as the TUI. Events are derived from each message
//! before it is processed, and the next file is submitted once the previous
//! upload has resolved.

use std::collections::VecDeque;
use std::io::Write;
use std::path::PathBuf;

use ipup_app::config::Settings;
use ipup_app::message::Message;
use ipup_app::state::AppState;
use ipup_app::Engine;
use ipup_core::prelude::*;
use ipup_core::render_details;

use super::HeadlessEvent;

/// Run in headless mode, writing events to stdout
pub async fn run_headless(settings: Settings, files: Vec<PathBuf>) -> Result<()> {
    let mut stdout = std::io::stdout();
    run_with_writer(settings, files, &mut stdout).await
}

/// Run in headless mode, writing events to `out`.
///
/// Fails when the node cannot be connected or when any upload failed.
pub async fn run_with_writer<W: Write>(
    mut settings: Settings,
    files: Vec<PathBuf>,
    out: &mut W,
) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("ipfs-upload starting in HEADLESS mode");
    info!("Node: {}, files: {}", settings.node.api_address, files.len());
    info!("═══════════════════════════════════════════════════════");

    // Headless mode always connects on startup
    settings.behavior.auto_connect = true;
    let mut engine = Engine::new(settings);

    let mut run = HeadlessRun::new(files);
    let result = run.event_loop(&mut engine, out).await;

    info!("ipfs-upload headless mode exiting");
    result
}

/// Progress through one headless invocation
struct HeadlessRun {
    queue: VecDeque<PathBuf>,
    current: Option<PathBuf>,
    /// Metadata calls not yet answered for the installed node
    pending_metadata: usize,
    connected: bool,
    failed_uploads: usize,
    total_uploads: usize,
    outcome: Option<Result<()>>,
}

impl HeadlessRun {
    fn new(files: Vec<PathBuf>) -> Self {
        let total_uploads = files.len();
        Self {
            queue: files.into(),
            current: None,
            pending_metadata: 0,
            connected: false,
            failed_uploads: 0,
            total_uploads,
            outcome: None,
        }
    }

    async fn event_loop<W: Write>(&mut self, engine: &mut Engine, out: &mut W) -> Result<()> {
        loop {
            if engine.should_quit() {
                info!("Quit requested");
                break;
            }

            let Some(msg) = engine.next_message().await else {
                info!("Message channel closed");
                break;
            };

            for event in self.events_for(&engine.state, &msg) {
                event
                    .write_to(out)
                    .context("Failed to write headless event")?;
            }
            engine.process_message(msg);

            if let Some(outcome) = self.outcome.take() {
                return outcome;
            }

            if self.connected && self.current.is_none() {
                if let Some(file) = self.queue.pop_front() {
                    HeadlessEvent::upload_started(&file).write_to(out)?;
                    self.current = Some(file.clone());
                    engine.process_message(Message::FilesSelected { files: vec![file] });
                } else if self.pending_metadata == 0 {
                    return self.finish();
                }
            }
        }

        Ok(())
    }

    /// Events describing `msg`, and bookkeeping for the run.
    ///
    /// Results the engine is about to drop as stale produce nothing.
    fn events_for(&mut self, state: &AppState, msg: &Message) -> Vec<HeadlessEvent> {
        let address = state.connect.address.value().trim();

        match msg {
            Message::ConnectSucceeded { attempt, .. } if state.is_latest_attempt(*attempt) => {
                self.connected = true;
                self.pending_metadata = 2;
                vec![HeadlessEvent::connected(address)]
            }
            Message::NodeOffline { attempt } if state.is_latest_attempt(*attempt) => {
                warn!("Node at {} is offline", address);
                self.outcome = Some(Err(Error::connection(format!("Node at {address} is offline"))));
                vec![HeadlessEvent::node_offline(address)]
            }
            Message::ConnectFailed { attempt, error } if state.is_latest_attempt(*attempt) => {
                self.outcome = Some(Err(Error::connection(error.clone())));
                vec![HeadlessEvent::connection_failed(address, error.clone())]
            }
            Message::MetadataFetched {
                connection,
                kind,
                metadata,
            } if is_installed(state, *connection) => {
                self.pending_metadata = self.pending_metadata.saturating_sub(1);
                match render_details(Some(metadata), kind.display_keys()) {
                    Ok(rows) => vec![HeadlessEvent::node_info(*kind, rows)],
                    Err(e) => vec![HeadlessEvent::metadata_failed(*kind, e.to_string())],
                }
            }
            Message::MetadataFetchFailed {
                connection,
                kind,
                error,
            } if is_installed(state, *connection) => {
                self.pending_metadata = self.pending_metadata.saturating_sub(1);
                vec![HeadlessEvent::metadata_failed(*kind, error.clone())]
            }
            Message::UploadCompleted { ticket, cid } if state.is_latest_upload(*ticket) => {
                let file = self.current.take().unwrap_or_default();
                let gateway_url = cid
                    .as_ref()
                    .map(|c| c.gateway_url(&state.settings.upload.gateway_url));
                vec![HeadlessEvent::upload_completed(&file, cid.as_ref(), gateway_url)]
            }
            Message::UploadFailed { ticket, error } if state.is_latest_upload(*ticket) => {
                let file = self.current.take().unwrap_or_default();
                self.failed_uploads += 1;
                vec![HeadlessEvent::upload_failed(&file, error.clone())]
            }
            _ => Vec::new(),
        }
    }

    fn finish(&self) -> Result<()> {
        if self.failed_uploads > 0 {
            return Err(Error::upload(format!(
                "{} of {} uploads failed",
                self.failed_uploads, self.total_uploads
            )));
        }
        Ok(())
    }
}

fn is_installed(state: &AppState, connection: ipup_app::ConnectionId) -> bool {
    state
        .node
        .as_ref()
        .is_some_and(|node| node.connection == connection)
}
