//! Test utilities for TUI rendering
//!
//! Wraps ratatui's `TestBackend` so view tests can draw a full frame and
//! search the result as text.

use ipup_app::state::AppState;
use ratatui::{backend::TestBackend, Terminal};

use crate::render;

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Draw the whole screen for `state`
    pub fn draw(&mut self, state: &AppState) {
        self.terminal
            .draw(|frame| render::view(frame, state))
            .expect("Failed to draw frame");
    }

    /// Buffer contents, one string per row
    pub fn rows(&self) -> Vec<String> {
        let buffer = self.terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    pub fn content(&self) -> String {
        self.rows().join("\n")
    }

    pub fn contains(&self, text: &str) -> bool {
        self.rows().iter().any(|row| row.contains(text))
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
