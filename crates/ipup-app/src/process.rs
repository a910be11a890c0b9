//! Message processing
//!
//! Runs the TEA update function and dispatches the actions it returns.

use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed in the same call; actions are handed to
/// [`handle_action`] which reports back on `msg_tx`.
pub fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone());
        }

        msg = result.message;
    }
}
