//! Main TUI runner - entry point and event loop

use std::path::PathBuf;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ipup_app::config::Settings;
use ipup_app::Engine;
use ipup_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits or a signal arrives.
///
/// `initial_file` pre-fills the upload path field.
pub async fn run(settings: Settings, initial_file: Option<PathBuf>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = execute!(std::io::stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable: {}", e);
    }

    let mut engine = Engine::new(settings);
    if let Some(file) = initial_file {
        engine.state.upload.path.set(file.display().to_string());
    }
    info!("TUI started");

    let result = run_loop(&mut term, &mut engine);

    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    info!("TUI exited");
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Task results and signals
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
