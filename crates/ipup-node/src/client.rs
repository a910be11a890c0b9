//! HTTP client for the node's RPC API

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use ipup_core::prelude::*;
use ipup_core::{EndpointAddress, NodeMetadata};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use url::Url;

use crate::add::{AddEvent, AddRequest, AddResponseParser, AddedEntry, ProgressFn, UploadStrategy};
use crate::address::resolve_api_url;
use crate::metadata::{has_addresses, parse_metadata};
use crate::node::StorageNode;

/// Characters left as-is in multipart file names; everything else is
/// percent-encoded, as JavaScript's `encodeURIComponent` does
const FILE_NAME_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Shared, read-only handle to a node that passed its liveness check
pub type ClientHandle = Arc<NodeClient>;

/// Client construction options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Per-request timeout. `None` keeps the transport's own behavior.
    pub timeout: Option<Duration>,
}

/// Client bound to one node address
#[derive(Debug, Clone)]
pub struct NodeClient {
    http: reqwest::Client,
    base_url: Url,
    address: EndpointAddress,
}

/// Error body returned by the node on non-2xx responses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiErrorBody {
    message: String,
}

impl NodeClient {
    /// Build a client for `address`.
    ///
    /// Fails if the address cannot be resolved or the HTTP client cannot be
    /// built. No request is sent.
    pub fn new(address: &EndpointAddress, options: &ClientOptions) -> Result<Self> {
        let base_url = resolve_api_url(address)?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("ipfs-upload/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| Error::http(describe(&e)))?;

        debug!("Node client for {} at {}", address, base_url);

        Ok(Self {
            http,
            base_url,
            address: address.clone(),
        })
    }

    /// The address this client was built from
    pub fn address(&self) -> &EndpointAddress {
        &self.address
    }

    /// Resolved RPC base URL (`.../api/v0/`)
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> Result<Url> {
        self.base_url
            .join(name)
            .map_err(|e| Error::protocol(format!("cannot build URL for '{name}': {e}")))
    }

    /// POST an endpoint with no body and return the metadata map it answers
    async fn call_metadata(&self, name: &str) -> Result<NodeMetadata> {
        let url = self.endpoint(name)?;
        trace!("POST {}", url);

        let response = self
            .http
            .post(url)
            .send()
            .await
            .map_err(|e| Error::http(describe(&e)))?;
        let response = check_status(response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| Error::http(describe(&e)))?;

        parse_metadata(&body)
    }
}

impl StorageNode for NodeClient {
    async fn is_online(&self) -> Result<bool> {
        let identity = self.call_metadata("id").await?;
        Ok(has_addresses(&identity))
    }

    async fn version(&self) -> Result<NodeMetadata> {
        self.call_metadata("version").await
    }

    async fn id(&self) -> Result<NodeMetadata> {
        self.call_metadata("id").await
    }

    async fn add(&self, request: AddRequest, progress: Option<ProgressFn>) -> Result<AddedEntry> {
        let url = self.endpoint("add")?;

        let (file_name, wrap) = match request.strategy {
            UploadStrategy::Raw => (String::new(), false),
            UploadStrategy::WrapWithDirectory { path } => (encode_file_name(&path), true),
        };

        let part = Part::bytes(request.content)
            .file_name(file_name)
            .mime_str("application/octet-stream")
            .map_err(|e| Error::http(describe(&e)))?;
        let form = Form::new().part("file", part);

        let mut query = vec![("progress", "true")];
        if wrap {
            query.push(("wrap-with-directory", "true"));
        }

        debug!("POST {} (wrap={})", url, wrap);
        let response = self
            .http
            .post(url)
            .query(&query)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::http(describe(&e)))?;
        let mut response = check_status(response).await?;

        let mut parser = AddResponseParser::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| Error::http(describe(&e)))?
        {
            for event in parser.feed(&chunk)? {
                apply_event(event, progress.as_ref())?;
            }
        }

        let (events, last) = parser.finish()?;
        for event in events {
            apply_event(event, progress.as_ref())?;
        }

        last.ok_or_else(|| Error::protocol("node returned no entries for add"))
    }
}

fn apply_event(event: AddEvent, progress: Option<&ProgressFn>) -> Result<()> {
    match event {
        AddEvent::Progress { name, bytes } => {
            trace!("add progress {}: {} bytes", name, bytes);
            if let Some(progress) = progress {
                progress(bytes);
            }
            Ok(())
        }
        AddEvent::Entry(entry) => {
            trace!("add entry {} -> {}", entry.name, entry.cid);
            Ok(())
        }
        AddEvent::Error(message) => Err(Error::api(200, message)),
    }
}

/// Percent-encode a wrapped file name; the node decodes it back to `name`
fn encode_file_name(name: &str) -> String {
    utf8_percent_encode(name, FILE_NAME_SET).to_string()
}

/// Turn a non-2xx response into [`Error::Api`] carrying the node's message
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status.to_string(),
    };

    warn!("Node returned {}: {}", status, message);
    Err(Error::api(status.as_u16(), message))
}

/// Flatten a reqwest error and its sources into one line.
///
/// reqwest's own Display stops at "error sending request"; the useful part
/// ("Connection refused") is further down the chain.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = StdError::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = StdError::source(cause);
    }
    message
}
