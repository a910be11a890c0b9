//! Semantic style builders.

use ipup_app::ConnectionPhase;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn link() -> Style {
    Style::default()
        .fg(palette::STATUS_BLUE)
        .add_modifier(Modifier::UNDERLINED)
}

/// Character under the cursor of a focused input
pub fn cursor() -> Style {
    Style::default().fg(palette::CURSOR_FG).bg(palette::CURSOR_BG)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

// --- Connection indicator ---

/// `(icon, label, style)` for the header status dot
pub fn connection_indicator(
    phase: ConnectionPhase,
    connecting: bool,
) -> (&'static str, &'static str, Style) {
    match (phase, connecting) {
        (_, true) => (
            "↻",
            "Connecting",
            status_yellow().add_modifier(Modifier::BOLD),
        ),
        (ConnectionPhase::Connected, false) => (
            "●",
            "Connected",
            status_green().add_modifier(Modifier::BOLD),
        ),
        (ConnectionPhase::Disconnected, false) => ("○", "Not Connected", text_muted()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_connection_indicator() {
        let (_, label, _) = connection_indicator(ConnectionPhase::Disconnected, false);
        assert_eq!(label, "Not Connected");

        let (icon, label, _) = connection_indicator(ConnectionPhase::Connected, false);
        assert_eq!((icon, label), ("●", "Connected"));

        // Reconnecting from a connected state still shows progress
        let (_, label, _) = connection_indicator(ConnectionPhase::Connected, true);
        assert_eq!(label, "Connecting");
    }
}
