//! Shared helpers for relay tests.

#![allow(clippy::unwrap_used)]
#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Map, Value};

use fireclient_relay::console::MemoryConsole;
use fireclient_relay::{MessageDispatcher, ResponseScanner};

pub const PREFIX: &str = "[NEW PREFIX]";

/// Encode `[descriptor, body]` as a Wildfire header value.
pub fn wildfire_value(message_type: &str, body: Value, extra: Value) -> String {
    let mut descriptor = Map::new();
    descriptor.insert("Type".into(), json!(message_type));
    descriptor.insert("File".into(), json!("/srv/app/index.php"));
    descriptor.insert("Line".into(), json!(42));
    if let Value::Object(extra) = extra {
        descriptor.extend(extra);
    }
    let encoded = serde_json::to_string(&json!([descriptor, body])).unwrap();
    format!("{}|{}|", encoded.len(), encoded)
}

pub fn scanner() -> (ResponseScanner, Arc<MemoryConsole>) {
    let console = Arc::new(MemoryConsole::new());
    let scanner = ResponseScanner::new(MessageDispatcher::new(PREFIX), console.clone());
    (scanner, console)
}
