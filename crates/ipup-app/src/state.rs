//! Application state (Model in TEA pattern)

use ipup_core::{AppPhase, ContentIdentifier, MetadataKind, NodeMetadata};
use ipup_node::ClientHandle;

use crate::config::Settings;
use crate::text_field::TextField;
use crate::ticket::{ConnectionId, Sequence, UploadTicket};

/// Which input currently receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Address,
    FilePath,
    KeepFilename,
}

impl Focus {
    const DISCONNECTED: [Focus; 1] = [Focus::Address];
    const CONNECTED: [Focus; 3] = [Focus::Address, Focus::FilePath, Focus::KeepFilename];

    /// Focus order; only the address field exists until a node is connected
    fn order(connected: bool) -> &'static [Focus] {
        if connected {
            &Self::CONNECTED
        } else {
            &Self::DISCONNECTED
        }
    }
}

/// Whether a node handle is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPhase {
    Disconnected,
    Connected,
}

/// Connect form state
#[derive(Debug, Clone, Default)]
pub struct ConnectForm {
    pub address: TextField,
    pub error: Option<String>,
    /// Latest attempt issued; results of older attempts are dropped
    pub latest_attempt: Option<ConnectionId>,
    /// The latest attempt has not resolved yet
    pub connecting: bool,
}

/// Upload form state
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub path: TextField,
    pub keep_filename: bool,
    /// Identifier of the most recent applied upload. Kept while a newer
    /// upload is pending and when it fails.
    pub cid: Option<ContentIdentifier>,
    pub error: Option<String>,
    /// Latest upload issued; results of older uploads are dropped
    pub latest_ticket: Option<UploadTicket>,
    /// The latest upload has not resolved yet
    pub uploading: bool,
}

/// An installed handle and the metadata fetched for it
#[derive(Debug, Clone)]
pub struct ConnectedNode {
    pub connection: ConnectionId,
    pub client: ClientHandle,
    pub version: Option<NodeMetadata>,
    pub identity: Option<NodeMetadata>,
    pub metadata_error: Option<String>,
}

impl ConnectedNode {
    fn new(connection: ConnectionId, client: ClientHandle) -> Self {
        Self {
            connection,
            client,
            version: None,
            identity: None,
            metadata_error: None,
        }
    }

    pub fn metadata(&self, kind: MetadataKind) -> Option<&NodeMetadata> {
        match kind {
            MetadataKind::Version => self.version.as_ref(),
            MetadataKind::Identity => self.identity.as_ref(),
        }
    }

    /// True once either metadata call has answered
    pub fn has_metadata(&self) -> bool {
        self.version.is_some() || self.identity.is_some()
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,
    pub focus: Focus,
    pub connect: ConnectForm,
    pub upload: UploadForm,
    pub node: Option<ConnectedNode>,
    connections: Sequence,
    uploads: Sequence,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        let connect = ConnectForm {
            address: TextField::new(settings.node.api_address.as_str()),
            ..ConnectForm::default()
        };
        let upload = UploadForm {
            keep_filename: settings.upload.keep_filename,
            ..UploadForm::default()
        };

        Self {
            phase: AppPhase::Running,
            settings,
            focus: Focus::Address,
            connect,
            upload,
            node: None,
            connections: Sequence::default(),
            uploads: Sequence::default(),
        }
    }

    pub fn connection_phase(&self) -> ConnectionPhase {
        match self.node {
            Some(_) => ConnectionPhase::Connected,
            None => ConnectionPhase::Disconnected,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection_phase() == ConnectionPhase::Connected
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Stamp a new connection attempt, superseding any in flight
    pub fn begin_connect(&mut self) -> ConnectionId {
        let attempt = self.connections.issue();
        self.connect.latest_attempt = Some(attempt);
        self.connect.connecting = true;
        attempt
    }

    pub fn is_latest_attempt(&self, attempt: ConnectionId) -> bool {
        self.connect.latest_attempt == Some(attempt)
    }

    /// Disconnected/Connected → Connected with a fresh handle.
    ///
    /// Replaces the previous handle and drops its metadata. Clears the
    /// connection error.
    pub fn install_handle(&mut self, connection: ConnectionId, client: ClientHandle) {
        self.node = Some(ConnectedNode::new(connection, client));
        self.connect.error = None;
        self.connect.connecting = false;
    }

    /// The installed node, if `connection` is the one installed
    pub fn node_for(&mut self, connection: ConnectionId) -> Option<&mut ConnectedNode> {
        self.node
            .as_mut()
            .filter(|node| node.connection == connection)
    }

    /// Stamp a new upload, superseding any in flight
    pub fn begin_upload(&mut self) -> UploadTicket {
        let ticket = self.uploads.issue();
        self.upload.latest_ticket = Some(ticket);
        self.upload.uploading = true;
        ticket
    }

    pub fn is_latest_upload(&self, ticket: UploadTicket) -> bool {
        self.upload.latest_ticket == Some(ticket)
    }

    /// Link to the current identifier on the configured gateway
    pub fn gateway_link(&self) -> Option<String> {
        self.upload
            .cid
            .as_ref()
            .map(|cid| cid.gateway_url(&self.settings.upload.gateway_url))
    }

    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    pub fn focus_previous(&mut self) {
        self.cycle_focus(-1);
    }

    fn cycle_focus(&mut self, step: isize) {
        let order = Focus::order(self.is_connected());
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let len = order.len() as isize;
        self.focus = order[(current + step).rem_euclid(len) as usize];
    }
}
