//! Header bar widget
//!
//! Title, connection status and the key hints for the current screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use ipup_app::state::{AppState, ConnectionPhase};

use crate::theme::styles;

/// Main header showing app title, connection status and keybindings
pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.connection_phase() {
            ConnectionPhase::Disconnected => &[("Enter", "connect"), ("Esc", "quit")],
            ConnectionPhase::Connected => &[
                ("Tab", "next"),
                ("Enter", "submit"),
                ("^K", "keep name"),
                ("Esc", "quit"),
            ],
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (icon, label, status_style) = styles::connection_indicator(
            self.state.connection_phase(),
            self.state.connect.connecting,
        );

        let title = Line::from(vec![
            Span::styled(format!("{icon} "), status_style),
            Span::styled("ipfs-upload", styles::accent_bold()),
            Span::styled(" │ ", styles::text_muted()),
            Span::styled(label, status_style),
        ]);
        let title_width = title.width() as u16;
        buf.set_line(inner.x + 1, inner.y, &title, inner.width.saturating_sub(1));

        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(*key, styles::status_yellow()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }
        let hints = Line::from(spans);
        let hints_width = hints.width() as u16;

        // Drop hints on narrow terminals rather than overlap the title
        if title_width + hints_width + 2 <= inner.width {
            let x = inner.x + inner.width - hints_width;
            buf.set_line(x, inner.y, &hints, hints_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState, width: u16) -> String {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(MainHeader::new(state), f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_header_shows_title_and_status() {
        let content = render(&AppState::new(), 80);
        assert!(content.contains("ipfs-upload"));
        assert!(content.contains("Not Connected"));
        assert!(content.contains("connect"));
    }

    #[test]
    fn test_header_connecting_status() {
        let mut state = AppState::new();
        state.begin_connect();
        assert!(render(&state, 80).contains("Connecting"));
    }

    #[test]
    fn test_header_narrow_drops_hints() {
        let content = render(&AppState::new(), 34);
        assert!(content.contains("ipfs-upload"));
        assert!(!content.contains("quit"));
    }
}
