//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs on its own tokio task and reports back with a
//! [`Message`]. Nothing here touches [`crate::state::AppState`].

use ipup_core::prelude::*;
use ipup_core::MetadataKind;
use tokio::sync::mpsc;

use crate::message::Message;
use crate::{connection, metadata, upload, UpdateAction};

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::Connect {
            attempt,
            address,
            options,
        } => {
            tokio::spawn(async move {
                let msg = match connection::attempt_connect(&address, &options).await {
                    Ok(Some(client)) => Message::ConnectSucceeded { attempt, client },
                    Ok(None) => Message::NodeOffline { attempt },
                    Err(e) => {
                        log_failure("Connection", &e);
                        Message::ConnectFailed {
                            attempt,
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::FetchMetadata { connection, client } => {
            for kind in [MetadataKind::Version, MetadataKind::Identity] {
                let msg_tx = msg_tx.clone();
                let client = client.clone();
                tokio::spawn(async move {
                    let msg = match metadata::fetch(&*client, kind).await {
                        Ok(metadata) => Message::MetadataFetched {
                            connection,
                            kind,
                            metadata,
                        },
                        Err(e) => {
                            log_failure("Metadata fetch", &e);
                            Message::MetadataFetchFailed {
                                connection,
                                kind,
                                error: e.to_string(),
                            }
                        }
                    };
                    send(&msg_tx, msg).await;
                });
            }
        }

        UpdateAction::Upload {
            ticket,
            client,
            selection,
        } => {
            tokio::spawn(async move {
                let msg = match upload::submit(&*client, &selection).await {
                    Ok(cid) => Message::UploadCompleted { ticket, cid },
                    Err(e) => {
                        log_failure("Upload", &e);
                        Message::UploadFailed {
                            ticket,
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }
    }
}

/// Failures the user can retry are warnings; anything else is an error
fn log_failure(what: &str, e: &Error) {
    if e.is_recoverable() {
        warn!("{} failed: {}", what, e);
    } else {
        error!("{} failed: {:?}", what, e);
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if msg_tx.send(msg).await.is_err() {
        debug!("Message channel closed; dropping task result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::Sequence;
    use ipup_core::EndpointAddress;
    use ipup_node::ClientOptions;

    #[tokio::test]
    async fn test_connect_action_reports_failure() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut seq = Sequence::default();
        let attempt = seq.issue();

        handle_action(
            UpdateAction::Connect {
                attempt,
                address: EndpointAddress::new("bogus"),
                options: ClientOptions::default(),
            },
            tx,
        );

        match rx.recv().await {
            Some(Message::ConnectFailed {
                attempt: got,
                error,
            }) => {
                assert_eq!(got, attempt);
                assert!(error.contains("bogus"));
            }
            other => panic!("expected ConnectFailed, got {other:?}"),
        }
    }
}
