//! ipfs-upload library
//!
//! Hosts the headless runner; the TUI lives in `ipup-tui`.

pub mod headless;

// Re-export main entry points
pub use headless::runner::{run_headless, run_with_writer};
