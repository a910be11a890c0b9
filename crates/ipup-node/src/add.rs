//! Upload request types and the `add` response stream parser
//!
//! The node answers `/api/v0/add` with newline-delimited JSON. With
//! `progress=true` the stream interleaves progress lines
//! (`{"Name":"photo.png","Bytes":262144}`) with entry lines
//! (`{"Name":"photo.png","Hash":"bafy...","Size":"1234"}`). When the content
//! is wrapped in a directory, the directory entry comes last. The node may
//! also report a failure mid-stream as `{"Message":"...","Type":"error"}`.

use std::sync::Arc;

use ipup_core::prelude::*;
use ipup_core::ContentIdentifier;
use serde::Deserialize;
use serde_json::Value;

/// Progress callback, invoked with the byte count reported by the node
pub type ProgressFn = Arc<dyn Fn(u64) + Send + Sync>;

/// How the content is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStrategy {
    /// Content only. The identifier depends on the bytes alone.
    Raw,

    /// Content stored under `path` inside a synthetic directory. The returned
    /// identifier is the directory's, not the content's.
    WrapWithDirectory { path: String },
}

impl UploadStrategy {
    pub fn wraps(&self) -> bool {
        matches!(self, UploadStrategy::WrapWithDirectory { .. })
    }
}

/// A single upload
#[derive(Debug, Clone)]
pub struct AddRequest {
    pub content: Vec<u8>,
    pub strategy: UploadStrategy,
}

impl AddRequest {
    pub fn raw(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            strategy: UploadStrategy::Raw,
        }
    }

    pub fn wrapped(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            strategy: UploadStrategy::WrapWithDirectory { path: path.into() },
        }
    }
}

/// One entry the node stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedEntry {
    /// Path of the entry; empty for the wrapping directory
    pub name: String,
    pub cid: ContentIdentifier,
    pub size: Option<u64>,
}

/// One parsed line of the `add` response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEvent {
    Progress { name: String, bytes: u64 },
    Entry(AddedEntry),
    Error(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AddLine {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    hash: Option<String>,
    #[serde(default)]
    bytes: Option<u64>,
    #[serde(default)]
    size: Option<Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "Type")]
    kind: Option<String>,
}

/// Parse one NDJSON line
pub fn parse_add_line(line: &str) -> Result<AddEvent> {
    let parsed: AddLine = serde_json::from_str(line)
        .map_err(|e| Error::protocol(format!("bad add response line '{line}': {e}")))?;

    if let Some(message) = parsed.message {
        if parsed.kind.as_deref() == Some("error") || parsed.hash.is_none() {
            return Ok(AddEvent::Error(message));
        }
    }

    let name = parsed.name.unwrap_or_default();

    if let Some(hash) = parsed.hash {
        return Ok(AddEvent::Entry(AddedEntry {
            name,
            cid: ContentIdentifier::new(hash),
            size: parsed.size.as_ref().and_then(parse_size),
        }));
    }

    if let Some(bytes) = parsed.bytes {
        return Ok(AddEvent::Progress { name, bytes });
    }

    Err(Error::protocol(format!(
        "add response line has neither Hash nor Bytes: {line}"
    )))
}

/// Kubo encodes sizes as decimal strings; tolerate plain numbers too.
fn parse_size(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_u64(),
        _ => None,
    }
}

/// Incremental NDJSON parser fed with raw response chunks.
///
/// Chunk boundaries do not line up with line boundaries, so a partial line is
/// buffered until its newline arrives.
#[derive(Debug, Default)]
pub struct AddResponseParser {
    buffer: Vec<u8>,
    last_entry: Option<AddedEntry>,
}

impl AddResponseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and return the events for every line it completed
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<AddEvent>> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(event) = self.parse_line(&line)? {
                events.push(event);
            }
        }
        Ok(events)
    }

    /// Flush the trailing line (if the stream did not end with a newline) and
    /// return the final entry.
    pub fn finish(mut self) -> Result<(Vec<AddEvent>, Option<AddedEntry>)> {
        let rest = std::mem::take(&mut self.buffer);
        let events = match self.parse_line(&rest)? {
            Some(event) => vec![event],
            None => Vec::new(),
        };
        Ok((events, self.last_entry))
    }

    fn parse_line(&mut self, raw: &[u8]) -> Result<Option<AddEvent>> {
        let line = std::str::from_utf8(raw)
            .map_err(|e| Error::protocol(format!("add response is not UTF-8: {e}")))?
            .trim();
        if line.is_empty() {
            return Ok(None);
        }

        let event = parse_add_line(line)?;
        if let AddEvent::Entry(ref entry) = event {
            self.last_entry = Some(entry.clone());
        }
        Ok(Some(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_progress_line() {
        let event = parse_add_line(r#"{"Name":"photo.png","Bytes":262144}"#).unwrap();
        assert_eq!(
            event,
            AddEvent::Progress {
                name: "photo.png".into(),
                bytes: 262144
            }
        );
    }

    #[test]
    fn test_parse_entry_line_with_string_size() {
        let event =
            parse_add_line(r#"{"Name":"photo.png","Hash":"bafkreia","Size":"1234"}"#).unwrap();
        match event {
            AddEvent::Entry(entry) => {
                assert_eq!(entry.name, "photo.png");
                assert_eq!(entry.cid.as_str(), "bafkreia");
                assert_eq!(entry.size, Some(1234));
            }
            other => panic!("expected entry, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_line() {
        let event =
            parse_add_line(r#"{"Message":"blockstore: write failed","Code":0,"Type":"error"}"#)
                .unwrap();
        assert_eq!(event, AddEvent::Error("blockstore: write failed".into()));
    }

    #[test]
    fn test_parse_garbage_line_is_protocol_error() {
        let err = parse_add_line("not json").unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_parse_line_without_hash_or_bytes() {
        assert!(parse_add_line(r#"{"Name":"x"}"#).is_err());
    }

    #[test]
    fn test_parser_handles_split_chunks() {
        let mut parser = AddResponseParser::new();
        let first = parser.feed(br#"{"Name":"a.txt","By"#).unwrap();
        assert!(first.is_empty());

        let second = parser
            .feed(b"tes\":5}\n{\"Name\":\"a.txt\",\"Hash\":\"bafkreib\",\"Size\":\"5\"}\n")
            .unwrap();
        assert_eq!(second.len(), 2);

        let (rest, last) = parser.finish().unwrap();
        assert!(rest.is_empty());
        assert_eq!(last.unwrap().cid.as_str(), "bafkreib");
    }

    #[test]
    fn test_last_entry_is_the_wrapping_directory() {
        let body = concat!(
            "{\"Name\":\"photo.png\",\"Bytes\":5}\n",
            "{\"Name\":\"photo.png\",\"Hash\":\"bafkfile\",\"Size\":\"5\"}\n",
            "{\"Name\":\"\",\"Hash\":\"bafydir\",\"Size\":\"60\"}\n",
        );
        let mut parser = AddResponseParser::new();
        let events = parser.feed(body.as_bytes()).unwrap();
        assert_eq!(events.len(), 3);

        let (_, last) = parser.finish().unwrap();
        let last = last.unwrap();
        assert_eq!(last.cid.as_str(), "bafydir");
        assert_eq!(last.name, "");
    }

    #[test]
    fn test_finish_flushes_unterminated_line() {
        let mut parser = AddResponseParser::new();
        parser
            .feed(br#"{"Name":"a","Hash":"bafkreic","Size":"1"}"#)
            .unwrap();
        let (events, last) = parser.finish().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(last.unwrap().cid.as_str(), "bafkreic");
    }

    #[test]
    fn test_strategy_wraps() {
        assert!(!UploadStrategy::Raw.wraps());
        assert!(AddRequest::wrapped("a.txt", b"x".to_vec()).strategy.wraps());
    }
}
