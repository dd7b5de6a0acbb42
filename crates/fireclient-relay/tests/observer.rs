//! Exchange hooks: user agent, request summary, header relay.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http::header::USER_AGENT;
use http::{HeaderMap, Request, Response, StatusCode};
use serde_json::{json, Value};

use fireclient_relay::config::{self, FireClientConfig};
use fireclient_relay::console::{ConsoleCall, MemoryConsole, Severity, TableKind};
use fireclient_relay::observer::summary::{EffectiveUrl, NO_RESPONSE};
use fireclient_relay::ResponseObserver;

mod common;
use common::wildfire_value;

fn observer(prefix: &str) -> (ResponseObserver, Arc<MemoryConsole>) {
    let cfg = config::load_from_str(&format!(
        "version: 1\nrelay:\n  remote_prefix: \"{prefix}\"\n  preview_length: 8\n"
    ))
    .unwrap();
    let console = Arc::new(MemoryConsole::new());
    (ResponseObserver::new(&cfg, console.clone()).unwrap(), console)
}

fn summary_table(call: &ConsoleCall) -> (String, Vec<Value>) {
    match call {
        ConsoleCall::Table {
            kind: TableKind::Request,
            label,
            rows,
        } => (label.clone(), rows.clone()),
        other => panic!("expected request summary, got {other:?}"),
    }
}

fn row_value<'a>(rows: &'a [Value], key: &str) -> Option<&'a Value> {
    rows.iter().find(|r| r[0] == key).map(|r| &r[1])
}

#[test]
fn before_send_advertises_firephp() {
    let (observer, _) = observer("[REMOTE]");
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, "my-app/1.0".parse().unwrap());

    observer.on_before_send(&mut headers);

    let agents: Vec<_> = headers.get_all(USER_AGENT).iter().collect();
    assert_eq!(agents.len(), 2);
    assert_eq!(agents[1], "FirePHP/0.7.4");
}

#[test]
fn complete_publishes_summary_then_relays_headers() {
    let (observer, console) = observer("[PREFIX]");
    let request = Request::builder()
        .method("POST")
        .uri("https://api.example.com/v1/users")
        .body(Bytes::from_static(b"{\"name\":\"ada lovelace\"}"))
        .unwrap();
    let response = Response::builder()
        .status(StatusCode::OK)
        .header("X-Wf-1-1-1-1", wildfire_value("INFO", json!("from server"), Value::Null))
        .header("Content-Type", "application/json")
        .body(Bytes::from_static(b"{\"id\":1234567890}"))
        .unwrap();

    let summary = observer.on_complete(&request, Some(&response), Duration::from_millis(1500));

    assert_eq!(summary.relayed, 1);
    let calls = console.calls();
    assert_eq!(calls.len(), 2);

    let (label, rows) = summary_table(&calls[0]);
    assert_eq!(
        label,
        "[PREFIX] <POST> (200) https://api.example.com/v1/users (1.5000)s"
    );
    assert_eq!(rows[0], json!(["Key", "Value"]));
    assert_eq!(row_value(&rows, "Phrase").unwrap(), "OK");
    assert_eq!(row_value(&rows, "Host").unwrap(), "api.example.com");
    assert_eq!(row_value(&rows, "Protocol").unwrap(), "https");
    assert_eq!(row_value(&rows, "Request").unwrap(), "{\"name\":");
    assert_eq!(row_value(&rows, "Response").unwrap(), "{\"id\":12");
    assert!(row_value(&rows, "Location").is_none());
    assert!(row_value(&rows, "Effective URL").is_none());

    assert_eq!(
        calls[1],
        ConsoleCall::Line {
            severity: Severity::Info,
            message: "[PREFIX] from server".into(),
        }
    );
}

#[test]
fn missing_response_still_publishes_summary() {
    let (observer, console) = observer("[REMOTE]");
    let request = Request::builder()
        .method("PATCH")
        .uri("https://abc.com")
        .body(Bytes::from_static(b"abcdefghj"))
        .unwrap();

    let summary = observer.on_complete::<_, Bytes>(&request, None, Duration::ZERO);

    assert_eq!(summary.candidates, 0);
    let calls = console.calls();
    assert_eq!(calls.len(), 1);

    let (label, rows) = summary_table(&calls[0]);
    assert!(label.contains("https://abc.com"), "{label}");
    assert!(label.contains("PATCH"), "{label}");
    assert!(label.contains("(0)"), "{label}");
    assert_eq!(row_value(&rows, "Phrase").unwrap(), NO_RESPONSE);
    assert_eq!(row_value(&rows, "Host").unwrap(), "abc.com");
    assert_eq!(row_value(&rows, "Protocol").unwrap(), "https");
    assert_eq!(row_value(&rows, "Request").unwrap(), "abcdefgh");
    assert_eq!(row_value(&rows, "Response").unwrap(), "");
}

#[test]
fn redirect_summary_lists_location() {
    let (observer, console) = observer("[REMOTE]");
    let request = Request::get("http://abc.com/old").body(Bytes::new()).unwrap();
    let response = Response::builder()
        .status(StatusCode::FOUND)
        .header("Location", "http://abc.com/new")
        .body(Bytes::new())
        .unwrap();

    observer.publish_request(&request, Some(&response), Duration::from_millis(5));

    let (_, rows) = summary_table(&console.calls()[0]);
    assert_eq!(row_value(&rows, "Location").unwrap(), "http://abc.com/new");
}

#[test]
fn response_hook_handles_repeated_header_names() {
    let (observer, console) = observer("[REMOTE]");
    let response = Response::builder()
        .header("x-wf-1-1-1-1", wildfire_value("LOG", json!("one"), Value::Null))
        .header("x-wf-1-1-1-1", wildfire_value("LOG", json!("two"), Value::Null))
        .body(())
        .unwrap();

    let summary = observer.on_response_received(&response);

    assert_eq!(summary.candidates, 2);
    assert_eq!(
        console.lines(Severity::Log),
        vec!["[REMOTE] one".to_string(), "[REMOTE] two".to_string()]
    );
}

#[test]
fn default_config_builds_an_observer() {
    let console = Arc::new(MemoryConsole::new());
    assert!(ResponseObserver::new(&FireClientConfig::default(), console).is_ok());
}

#[test]
fn followed_redirect_lists_effective_url() {
    let (observer, console) = observer("[REMOTE]");
    let request = Request::get("http://abc.com/old").body(Bytes::new()).unwrap();
    let mut response = Response::builder()
        .status(StatusCode::OK)
        .body(Bytes::new())
        .unwrap();
    response
        .extensions_mut()
        .insert(EffectiveUrl("http://abc.com/new".into()));

    observer.publish_request(&request, Some(&response), Duration::from_millis(5));

    let (_, rows) = summary_table(&console.calls()[0]);
    assert_eq!(row_value(&rows, "Effective URL").unwrap(), "http://abc.com/new");
    assert!(row_value(&rows, "Location").is_none());
}

#[test]
fn unchanged_effective_url_is_omitted() {
    let (observer, console) = observer("[REMOTE]");
    let request = Request::get("http://abc.com/same").body(Bytes::new()).unwrap();
    let mut response = Response::new(Bytes::new());
    response
        .extensions_mut()
        .insert(EffectiveUrl("http://abc.com/same".into()));

    observer.publish_request(&request, Some(&response), Duration::ZERO);

    let (_, rows) = summary_table(&console.calls()[0]);
    assert!(row_value(&rows, "Effective URL").is_none());
}
