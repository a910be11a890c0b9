//! Screen layout definitions for the TUI
//!
//! The node details and upload panels only exist while a node is connected.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;
/// Connect form: borders + address row + error row
pub const CONNECT_HEIGHT: u16 = 4;
/// Upload form: borders + path, checkbox, progress, result, link and error rows
pub const UPLOAD_HEIGHT: u16 = 8;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub connect: Rect,
    /// Connected node details (connected only)
    pub details: Option<Rect>,
    /// Upload form (connected only)
    pub upload: Option<Rect>,
}

/// Create the main screen layout
pub fn create(area: Rect, connected: bool) -> ScreenAreas {
    if !connected {
        let [header, connect, _] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(CONNECT_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);

        return ScreenAreas {
            header,
            connect,
            details: None,
            upload: None,
        };
    }

    let [header, connect, upload, details] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(CONNECT_HEIGHT),
        Constraint::Length(UPLOAD_HEIGHT),
        Constraint::Min(3),
    ])
    .areas(area);

    ScreenAreas {
        header,
        connect,
        details: Some(details),
        upload: Some(upload),
    }
}
