//! ipup-app - Application state and orchestration for ipfs-upload
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the Engine shared by the TUI and headless runners,
//! configuration loading, and the connect / upload / metadata workflows.

pub mod actions;
pub mod config;
pub mod connection;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod metadata;
pub mod process;
pub mod signals;
pub mod state;
pub mod text_field;
pub mod ticket;
pub mod upload;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{AppState, ConnectedNode, ConnectionPhase, Focus};
pub use ticket::{ConnectionId, UploadTicket};
pub use upload::FileSelection;
