//! ipfs-upload - Upload files to an IPFS node from the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use ipup_app::config::{self, Settings};
use ipup_core::EndpointAddress;

/// ipfs-upload - Upload files to an IPFS node from the terminal
#[derive(Parser, Debug)]
#[command(name = "ipfs-upload", version)]
#[command(about = "Upload files to an IPFS node from the terminal", long_about = None)]
struct Args {
    /// Node API address (multiaddr or URL)
    #[arg(long, value_name = "ADDR")]
    api: Option<String>,

    /// Config file (default: <config dir>/ipfs-upload/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Wrap uploads in a directory so the file name is kept
    #[arg(long)]
    keep_filename: bool,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Files to upload
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    ipup_core::logging::init()?;

    let config_path = args
        .config
        .clone()
        .or_else(config::default_config_path)
        .ok_or_else(|| eyre!("No config directory on this platform; pass --config"))?;

    if args.init_config {
        config::init_config_file(&config_path)?;
        eprintln!("Config file: {}", config_path.display());
        return Ok(());
    }

    let settings = apply_overrides(config::load_settings(&config_path), &args);

    if args.headless {
        ipfs_upload::run_headless(settings, args.files).await?;
    } else {
        let initial_file = args.files.into_iter().next();
        ipup_tui::run(settings, initial_file).await?;
    }

    Ok(())
}

/// Command-line flags win over the config file
fn apply_overrides(mut settings: Settings, args: &Args) -> Settings {
    if let Some(api) = args.api.as_deref() {
        settings.node.api_address = EndpointAddress::new(api);
        settings.behavior.auto_connect = true;
    }
    if args.keep_filename {
        settings.upload.keep_filename = true;
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_flag_overrides_address_and_connects() {
        let args = Args::parse_from(["ipfs-upload", "--api", "/ip4/10.0.0.2/tcp/5001"]);
        let settings = apply_overrides(Settings::default(), &args);

        assert_eq!(settings.node.api_address.as_str(), "/ip4/10.0.0.2/tcp/5001");
        assert!(settings.behavior.auto_connect);
    }

    #[test]
    fn test_no_flags_keep_file_values() {
        let mut file = Settings::default();
        file.upload.keep_filename = true;

        let args = Args::parse_from(["ipfs-upload"]);
        assert_eq!(apply_overrides(file.clone(), &args), file);
    }

    #[test]
    fn test_files_and_flags_parse() {
        let args = Args::parse_from([
            "ipfs-upload",
            "--headless",
            "--keep-filename",
            "a.png",
            "b.png",
        ]);
        assert!(args.headless);
        assert!(apply_overrides(Settings::default(), &args).upload.keep_filename);
        assert_eq!(args.files, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
    }

    #[test]
    fn test_api_help_lists_accepted_notations() {
        use clap::CommandFactory;

        let help = Args::command().render_help().to_string();
        assert!(help.contains("Node API address (multiaddr or URL)"));
        assert!(!help.contains("host:port"));
    }
}
