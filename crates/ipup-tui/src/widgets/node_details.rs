//! Connected node details panel
//!
//! Identity rows first (`id`, `agentVersion`), then the version row. Each
//! metadata slot renders on its own; a slot that has not answered yet shows
//! nothing, and a slot missing an expected key shows the error inline.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use ipup_app::state::ConnectedNode;
use ipup_core::{render_details, MetadataKind};

use super::ErrorBanner;
use crate::theme::styles;

/// Width of the label column
const LABEL_WIDTH: usize = 14;

const SECTIONS: [MetadataKind; 2] = [MetadataKind::Identity, MetadataKind::Version];

pub struct NodeDetails<'a> {
    node: &'a ConnectedNode,
}

impl<'a> NodeDetails<'a> {
    pub fn new(node: &'a ConnectedNode) -> Self {
        Self { node }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        if self.node.has_metadata() {
            lines.push(Line::from(Span::styled(
                " Connected to IPFS",
                styles::status_green().add_modifier(Modifier::BOLD),
            )));
        }

        for kind in SECTIONS {
            match render_details(self.node.metadata(kind), kind.display_keys()) {
                Ok(rows) => lines.extend(rows.into_iter().map(|row| {
                    Line::from(vec![
                        Span::styled(
                            format!(" {:<width$}", row.label, width = LABEL_WIDTH),
                            styles::text_secondary(),
                        ),
                        Span::styled(row.value, styles::text_primary()),
                    ])
                })),
                Err(e) => lines.push(Line::from(vec![
                    Span::styled(format!(" {kind}: "), styles::text_secondary()),
                    Span::styled(e.to_string(), styles::status_yellow()),
                ])),
            }
        }

        if let Some(error) = self.node.metadata_error.as_deref() {
            let mut banner = ErrorBanner::new(error).line();
            banner.spans.insert(0, Span::raw(" "));
            lines.push(banner);
        }

        lines
    }
}

impl Widget for NodeDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block =
            styles::glass_block(false).title(Span::styled(" Node ", styles::text_secondary()));
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use ipup_app::ticket::ConnectionId;
    use ipup_core::EndpointAddress;
    use ipup_node::test_utils::{sample_identity, sample_version};
    use ipup_node::{ClientOptions, NodeClient};

    fn node() -> ConnectedNode {
        let client = NodeClient::new(
            &EndpointAddress::new("/ip4/127.0.0.1/tcp/5001"),
            &ClientOptions::default(),
        )
        .unwrap();
        ConnectedNode {
            connection: ConnectionId::from(1),
            client: Arc::new(client),
            version: None,
            identity: None,
            metadata_error: None,
        }
    }

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_no_metadata_renders_nothing() {
        let node = node();
        assert!(NodeDetails::new(&node).lines().is_empty());
    }

    #[test]
    fn test_identity_only_shows_heading_and_rows() {
        let mut node = node();
        node.identity = Some(sample_identity("12D3KooWTest", "kubo/0.29.0/"));

        let lines = NodeDetails::new(&node).lines();
        // Heading plus id and agentVersion; no version row yet
        assert_eq!(lines.len(), 3);
        let content = text(&lines);
        assert!(content.contains("Connected to IPFS"));
        assert!(content.contains("12D3KooWTest"));
        assert!(content.contains("kubo/0.29.0/"));
    }

    #[test]
    fn test_missing_key_shown_inline() {
        let mut node = node();
        let mut version = sample_version("0.29.0");
        version.remove("version");
        node.version = Some(version);

        let content = text(&NodeDetails::new(&node).lines());
        assert!(content.contains("version: Missing attribute 'version' in node metadata"));
    }

    #[test]
    fn test_metadata_error_banner() {
        let mut node = node();
        node.metadata_error = Some("context deadline exceeded".into());

        let content = text(&NodeDetails::new(&node).lines());
        assert!(content.contains("Error: context deadline exceeded"));
    }
}
