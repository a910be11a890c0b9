//! Configuration file parsing for ipfs-upload
//!
//! Supports `<config_dir>/ipfs-upload/config.toml`, or any path given with
//! `--config`.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
