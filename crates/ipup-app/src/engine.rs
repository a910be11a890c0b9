//! Engine - shared orchestration state for TUI and headless runners
//!
//! Owns the application state and the message channel that background tasks
//! report back on.

use tokio::sync::mpsc;
use tracing::info;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Channel capacity for task results and input events
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for ipfs-upload.
///
/// Both runners drive the same loop: pull a message, hand it to
/// [`Engine::process_message`], render or emit.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,
}

impl Engine {
    /// Create an engine from loaded settings.
    ///
    /// Spawns the signal handler, so this must run inside a tokio runtime.
    /// With `behavior.auto_connect` a `Connect` is queued immediately.
    pub fn new(settings: Settings) -> Self {
        let auto_connect = settings.behavior.auto_connect;
        let state = AppState::with_settings(settings);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        if auto_connect {
            info!("Auto-connecting to {}", state.connect.address.value());
            let _ = msg_tx.try_send(Message::Connect);
        }

        Self {
            state,
            msg_tx,
            msg_rx,
        }
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message. `None` once every sender is gone.
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}
