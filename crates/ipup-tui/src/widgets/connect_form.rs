//! Connect form panel: node API address plus the connection error

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use ipup_app::state::{AppState, Focus};

use super::{input_line, ErrorBanner};
use crate::theme::styles;

pub struct ConnectPanel<'a> {
    state: &'a AppState,
}

impl<'a> ConnectPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for ConnectPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::Address;
        let block = styles::glass_block(focused)
            .title(Span::styled(" Node API address ", styles::text_secondary()));

        let form = &self.state.connect;
        let mut lines = vec![input_line(" ", &form.address, focused)];

        if form.connecting {
            lines.push(Line::from(Span::styled(" Connecting…", styles::status_yellow())));
        } else if let Some(error) = form.error.as_deref() {
            let mut banner = ErrorBanner::new(error).line();
            banner.spans.insert(0, Span::raw(" "));
            lines.push(banner);
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
