//! Raw HTTP/1.x response heads parsed with httparse.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::{json, Value};

use fireclient_core::FireClientError;
use fireclient_relay::adapter::raw::{parse_response_head, scan_raw_response};
use fireclient_relay::console::{ConsoleCall, Severity};

mod common;
use common::{scanner, wildfire_value, PREFIX};

#[test]
fn raw_dump_is_scanned_in_wire_order() {
    let (scanner, console) = scanner();
    let dump = format!(
        "HTTP/1.1 200 OK\r\n\
         Content-Type: text/html\r\n\
         X-Wf-Protocol-1: http://meta.wildfirehq.org/Protocol/JsonStream/0.2\r\n\
         X-Wf-1-1-1-1: {}\r\n\
         X-Wf-1-1-1-2: {}\r\n\
         \r\n\
         <html></html>",
        wildfire_value("WARN", json!("first"), Value::Null),
        wildfire_value("ERROR", json!("second"), Value::Null),
    );

    let summary = scan_raw_response(&scanner, dump.as_bytes()).unwrap();

    // The protocol announcement header is a candidate but not a frame.
    assert_eq!(summary.candidates, 3);
    assert_eq!(summary.failed, 1);

    let calls = console.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[1],
        ConsoleCall::Line {
            severity: Severity::Warn,
            message: format!("{PREFIX} first"),
        }
    );
    assert_eq!(
        calls[2],
        ConsoleCall::Line {
            severity: Severity::Error,
            message: format!("{PREFIX} second"),
        }
    );
}

#[test]
fn head_keeps_status_and_headers() {
    let head = parse_response_head(b"HTTP/1.1 404 Not Found\r\nX-Wf-1: a\r\nX-Wf-1: b\r\n\r\n").unwrap();
    assert_eq!(head.status_code, 404);
    assert_eq!(head.reason, "Not Found");
    assert_eq!(head.headers.len(), 2);
    assert_eq!(head.headers[1], ("X-Wf-1".to_string(), "b".to_string()));
}

#[test]
fn truncated_head_is_rejected() {
    let err = parse_response_head(b"HTTP/1.1 200 OK\r\nX-Wf-1-1-1-1: 12|").unwrap_err();
    assert!(matches!(err, FireClientError::BadResponse(_)), "{err}");
}

#[test]
fn long_debug_logs_beyond_default_header_buffer_are_relayed() {
    let (scanner, console) = scanner();
    let mut dump = String::from("HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n");
    for n in 1..=300 {
        let value = wildfire_value("LOG", json!(format!("line {n}")), Value::Null);
        dump.push_str(&format!("X-Wf-1-1-1-{n}: {value}\r\n"));
    }
    dump.push_str("\r\n");

    let summary = scan_raw_response(&scanner, dump.as_bytes()).unwrap();

    assert_eq!(summary.candidates, 300);
    assert_eq!(summary.relayed, 300);
    let logs = console.lines(Severity::Log);
    assert_eq!(logs.len(), 300);
    assert_eq!(logs[0], format!("{PREFIX} line 1"));
    assert_eq!(logs[299], format!("{PREFIX} line 300"));
}
