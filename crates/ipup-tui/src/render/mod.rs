//! Main render/view function (View in TEA pattern)


use ipup_app::state::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state and draws it. The upload and details panels only
/// exist while a node handle is installed.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.is_connected());

    frame.render_widget(widgets::MainHeader::new(state), areas.header);
    frame.render_widget(widgets::ConnectPanel::new(state), areas.connect);

    if let (Some(node), Some(upload), Some(details)) =
        (state.node.as_ref(), areas.upload, areas.details)
    {
        frame.render_widget(widgets::UploadPanel::new(state), upload);
        frame.render_widget(widgets::NodeDetails::new(node), details);
    }
}
