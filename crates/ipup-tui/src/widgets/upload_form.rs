//! Upload form panel
//!
//! File path input, keep-filename checkbox, then the result of the latest
//! applied upload. A pending upload shows progress without hiding the
//! previous identifier.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use ipup_app::state::{AppState, Focus};

use super::{input_line, ErrorBanner};
use crate::theme::styles;

pub struct UploadPanel<'a> {
    state: &'a AppState,
}

impl<'a> UploadPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn checkbox(&self) -> Line<'a> {
        let focused = self.state.focus == Focus::KeepFilename;
        let mark = if self.state.upload.keep_filename {
            "[x]"
        } else {
            "[ ]"
        };
        let style = if focused {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(mark, style),
            Span::styled(" Keep Filename", style),
        ])
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let form = &self.state.upload;
        let mut lines = vec![
            input_line(" File ", &form.path, self.state.focus == Focus::FilePath),
            self.checkbox(),
        ];

        if form.uploading {
            lines.push(Line::from(Span::styled(" Uploading…", styles::status_yellow())));
        }

        if let Some(cid) = form.cid.as_ref() {
            lines.push(Line::from(vec![
                Span::styled(" CID  ", styles::text_secondary()),
                Span::styled(cid.as_str(), styles::text_bright_bold()),
            ]));
        }
        if let Some(link) = self.state.gateway_link() {
            lines.push(Line::from(vec![
                Span::styled(" Link ", styles::text_secondary()),
                Span::styled(link, styles::link()),
            ]));
        }

        if let Some(error) = form.error.as_deref() {
            let mut banner = ErrorBanner::new(error).line();
            banner.spans.insert(0, Span::raw(" "));
            lines.push(banner);
        }

        lines
    }
}

impl Widget for UploadPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = matches!(self.state.focus, Focus::FilePath | Focus::KeepFilename);
        let block = styles::glass_block(focused)
            .title(Span::styled(" Upload ", styles::text_secondary()));
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
