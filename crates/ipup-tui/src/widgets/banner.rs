//! Error banner widget

use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use crate::theme::styles;

/// One-line `Error: <message>` banner. The message is shown verbatim.
pub struct ErrorBanner<'a> {
    message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    pub fn line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled("Error: ", styles::status_red().add_modifier(Modifier::BOLD)),
            Span::styled(self.message, styles::status_red()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_prefixes_message() {
        let line = ErrorBanner::new("connection refused").line();
        assert_eq!(line.to_string(), "Error: connection refused");
        assert_eq!(line.spans[1].style, styles::status_red());
    }

    #[test]
    fn test_banner_keeps_message_verbatim() {
        let message = "error sending request: Connection refused (os error 111)";
        let line = ErrorBanner::new(message).line();
        assert_eq!(line.spans[1].content, message);
    }
}
