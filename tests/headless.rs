//! Headless runner against a mocked node.
//!
//! Each test runs the full engine loop and checks the NDJSON written out.

use std::io::Write;

use ipup_app::config::Settings;
use ipup_core::EndpointAddress;
use serde_json::Value;
use tempfile::NamedTempFile;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const IDENTITY: &str = r#"{
    "ID": "12D3KooWHeadless",
    "PublicKey": "CAESIHeadless",
    "Addresses": ["/ip4/127.0.0.1/tcp/4001/p2p/12D3KooWHeadless"],
    "AgentVersion": "kubo/0.29.0/",
    "ProtocolVersion": "ipfs/0.1.0",
    "Protocols": []
}"#;

const OFFLINE_IDENTITY: &str = r#"{"ID":"12D3KooWHeadless","Addresses":null,"AgentVersion":"kubo/0.29.0/"}"#;

const VERSION: &str = r#"{"Version":"0.29.0","Commit":"","Repo":"15","System":"amd64/linux","Golang":"go1.22.4"}"#;

fn settings_for(address: &str) -> Settings {
    let mut settings = Settings::default();
    settings.node.api_address = EndpointAddress::new(address);
    settings.node.request_timeout_secs = Some(5);
    settings
}

async fn mount_node(server: &MockServer, identity: &str) {
    Mock::given(method("POST"))
        .and(path("/api/v0/id"))
        .respond_with(ResponseTemplate::new(200).set_body_string(identity))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v0/version"))
        .respond_with(ResponseTemplate::new(200).set_body_string(VERSION))
        .mount(server)
        .await;
}

fn events(out: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(out)
        .lines()
        .map(|line| serde_json::from_str(line).expect("event line is JSON"))
        .collect()
}

fn find<'a>(events: &'a [Value], name: &str) -> Option<&'a Value> {
    events.iter().find(|e| e["event"] == name)
}

#[tokio::test]
async fn reports_node_info_and_uploads_files() {
    let server = MockServer::start().await;
    mount_node(&server, IDENTITY).await;
    Mock::given(method("POST"))
        .and(path("/api/v0/add"))
        .respond_with(ResponseTemplate::new(200).set_body_string(concat!(
            "{\"Name\":\"\",\"Bytes\":5}\n",
            "{\"Name\":\"bafkreiheadless\",\"Hash\":\"bafkreiheadless\",\"Size\":\"5\"}\n",
        )))
        .expect(2)
        .mount(&server)
        .await;

    let mut first = NamedTempFile::new().unwrap();
    first.write_all(b"hello").unwrap();
    let mut second = NamedTempFile::new().unwrap();
    second.write_all(b"world").unwrap();

    let mut out = Vec::new();
    assert_ok!(
        ipfs_upload::run_with_writer(
            settings_for(&server.uri()),
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
            &mut out,
        )
        .await
    );

    let events = events(&out);
    assert_eq!(events[0]["event"], "connected");

    let identity = events
        .iter()
        .find(|e| e["event"] == "node_info" && e["kind"] == "identity")
        .expect("identity event");
    assert_eq!(identity["details"]["id"], "12D3KooWHeadless");
    assert_eq!(identity["details"]["agentVersion"], "kubo/0.29.0/");

    let version = events
        .iter()
        .find(|e| e["event"] == "node_info" && e["kind"] == "version")
        .expect("version event");
    assert_eq!(version["details"]["version"], "0.29.0");

    let completed: Vec<_> = events
        .iter()
        .filter(|e| e["event"] == "upload_completed")
        .collect();
    assert_eq!(completed.len(), 2);
    assert_eq!(completed[0]["file"], first.path().display().to_string());
    assert_eq!(completed[1]["file"], second.path().display().to_string());
    assert_eq!(completed[0]["cid"], "bafkreiheadless");
    assert_eq!(
        completed[0]["gateway_url"],
        "https://ipfs.io/ipfs/bafkreiheadless"
    );
}

#[tokio::test]
async fn missing_file_fails_the_run() {
    let server = MockServer::start().await;
    mount_node(&server, IDENTITY).await;

    let mut out = Vec::new();
    let result = ipfs_upload::run_with_writer(
        settings_for(&server.uri()),
        vec!["/definitely/not/here.png".into()],
        &mut out,
    )
    .await;

    assert_err!(result);
    let events = events(&out);
    let failed = find(&events, "upload_failed").expect("upload_failed event");
    assert_eq!(failed["file"], "/definitely/not/here.png");
    assert!(!failed["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn offline_node_stops_before_uploading() {
    let server = MockServer::start().await;
    mount_node(&server, OFFLINE_IDENTITY).await;

    let mut out = Vec::new();
    let result =
        ipfs_upload::run_with_writer(settings_for(&server.uri()), vec!["a.png".into()], &mut out)
            .await;

    assert_err!(result);
    let events = events(&out);
    assert!(find(&events, "node_offline").is_some());
    assert!(find(&events, "upload_started").is_none());
}

#[tokio::test]
async fn unreachable_node_reports_connection_failure() {
    let mut out = Vec::new();
    let result =
        ipfs_upload::run_with_writer(settings_for("http://127.0.0.1:1"), Vec::new(), &mut out)
            .await;

    assert_err!(result);
    let events = events(&out);
    let failed = find(&events, "connection_failed").expect("connection_failed event");
    assert_eq!(failed["address"], "http://127.0.0.1:1");
}
