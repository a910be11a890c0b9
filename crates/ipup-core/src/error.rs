//! Application error types with rich context

use thiserror::Error;

use crate::types::MetadataKind;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Node Transport Errors
    // ─────────────────────────────────────────────────────────────
    /// Malformed or unsupported node address. Raised while building a client.
    #[error("Invalid node address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Transport-level failure (refused connection, DNS, TLS, timeout).
    #[error("{message}")]
    Http { message: String },

    /// The node answered with a non-success status. `message` is the node's
    /// own error text.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The node answered, but not in a shape we understand.
    #[error("Unexpected node response: {message}")]
    Protocol { message: String },

    // ─────────────────────────────────────────────────────────────
    // Workflow Errors
    //
    // These carry the underlying failure text verbatim so the UI can show it
    // without rewording.
    // ─────────────────────────────────────────────────────────────
    #[error("{message}")]
    Connection { message: String },

    #[error("{message}")]
    Upload { message: String },

    #[error("{message}")]
    MetadataFetch { kind: MetadataKind, message: String },

    #[error("Missing attribute '{key}' in node metadata")]
    MissingKey { key: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn invalid_address(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            address: address.into(),
            reason: reason.into(),
        }
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }

    pub fn metadata_fetch(kind: MetadataKind, message: impl Into<String>) -> Self {
        Self::MetadataFetch {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Everything the user can fix by re-triggering an action (connect,
    /// upload) is recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::InvalidAddress { .. }
                | Error::Http { .. }
                | Error::Api { .. }
                | Error::Protocol { .. }
                | Error::Connection { .. }
                | Error::Upload { .. }
                | Error::MetadataFetch { .. }
                | Error::MissingKey { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_errors_display_verbatim() {
        let err = Error::connection("connection refused");
        assert_eq!(err.to_string(), "connection refused");

        let err = Error::upload("file does not exist");
        assert_eq!(err.to_string(), "file does not exist");

        let err = Error::metadata_fetch(MetadataKind::Version, "boom");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_api_error_displays_node_message() {
        let err = Error::api(500, "merkledag: not found");
        assert_eq!(err.to_string(), "merkledag: not found");
    }

    #[test]
    fn test_invalid_address_display() {
        let err = Error::invalid_address("/ip4/nope", "expected /tcp/<port>");
        let text = err.to_string();
        assert!(text.contains("/ip4/nope"));
        assert!(text.contains("expected /tcp/<port>"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::connection("refused").is_recoverable());
        assert!(Error::upload("rejected").is_recoverable());
        assert!(Error::http("timeout").is_recoverable());
        assert!(Error::missing_key("agentVersion").is_recoverable());
        assert!(!Error::TerminalInit("no tty".into()).is_recoverable());
    }

    #[test]
    fn test_missing_key_names_the_key() {
        let err = Error::missing_key("agentVersion");
        assert!(err.to_string().contains("agentVersion"));
    }
}
