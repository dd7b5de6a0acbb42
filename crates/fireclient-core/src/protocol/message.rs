//! Wildfire message domain types.
//!
//! The descriptor's `Type` tag and the payload's shape are inspected once,
//! here, and turned into closed enums. Downstream code matches on
//! [`MessageKind`] and [`Payload`] instead of re-reading loose JSON.

use std::fmt;

use serde_json::{Map, Value};

const TYPE_KEY: &str = "Type";
const LABEL_KEY: &str = "Label";
const TRACE_KEY: &str = "Trace";
const MESSAGE_KEY: &str = "Message";

/// Placeholder rendered for composite trace arguments.
pub const COMPOSITE_ARG: &str = "Array";

/// Message kind carried in `Descriptor.Type` (case-sensitive, uppercase on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Log,
    Info,
    Warn,
    Error,
    Table,
    Trace,
    /// Any other tag, kept verbatim for error reporting.
    Unhandled(String),
}

impl MessageKind {
    /// Decode a wire tag.
    pub fn from_wire(tag: &str) -> Self {
        match tag {
            "LOG" => MessageKind::Log,
            "INFO" => MessageKind::Info,
            "WARN" => MessageKind::Warn,
            "ERROR" => MessageKind::Error,
            "TABLE" => MessageKind::Table,
            "TRACE" => MessageKind::Trace,
            other => MessageKind::Unhandled(other.to_string()),
        }
    }

    /// Wire tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            MessageKind::Log => "LOG",
            MessageKind::Info => "INFO",
            MessageKind::Warn => "WARN",
            MessageKind::Error => "ERROR",
            MessageKind::Table => "TABLE",
            MessageKind::Trace => "TRACE",
            MessageKind::Unhandled(tag) => tag,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frame descriptor: the decoded `Type`/`Label` plus every original field.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    pub kind: MessageKind,
    pub label: Option<String>,
    fields: Map<String, Value>,
}

impl Descriptor {
    /// Build from a descriptor object. `None` when `Type` is absent or null.
    pub fn from_fields(fields: Map<String, Value>) -> Option<Self> {
        let kind = match fields.get(TYPE_KEY)? {
            Value::Null => return None,
            Value::String(tag) => MessageKind::from_wire(tag),
            other => MessageKind::Unhandled(other.to_string()),
        };
        let label = match fields.get(LABEL_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        Some(Self {
            kind,
            label,
            fields,
        })
    }

    /// Raw descriptor field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All descriptor fields as received.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// Frame payload, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// String, number, bool or null.
    Scalar(Value),
    /// JSON array: a row sequence for tables.
    Rows(Vec<Value>),
    /// Object with a `Trace` array: a stack trace.
    Trace {
        record: TraceRecord,
        raw: Map<String, Value>,
    },
    /// Any other object.
    Composite(Map<String, Value>),
}

impl Payload {
    /// Classify a payload value by shape.
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Array(rows) => Payload::Rows(rows),
            Value::Object(map) => match TraceRecord::from_object(&map) {
                Some(record) => Payload::Trace { record, raw: map },
                None => Payload::Composite(map),
            },
            scalar => Payload::Scalar(scalar),
        }
    }

    /// Arrays and objects are array-like; scalars are not.
    pub fn is_array_like(&self) -> bool {
        !matches!(self, Payload::Scalar(_))
    }

    /// Rebuild the original JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            Payload::Scalar(v) => v.clone(),
            Payload::Rows(rows) => Value::Array(rows.clone()),
            Payload::Trace { raw, .. } | Payload::Composite(raw) => Value::Object(raw.clone()),
        }
    }

    /// Plain-text rendering: strings verbatim, anything else as compact JSON.
    pub fn render_text(&self) -> String {
        match self {
            Payload::Scalar(Value::String(s)) => s.clone(),
            other => other.to_value().to_string(),
        }
    }
}

/// Stack trace payload: `{"Message": ..., "Trace": [entry, ...]}`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TraceRecord {
    pub message: Option<String>,
    pub entries: Vec<TraceEntry>,
}

impl TraceRecord {
    /// `None` unless the object has a `Trace` array.
    pub fn from_object(map: &Map<String, Value>) -> Option<Self> {
        let entries = map
            .get(TRACE_KEY)?
            .as_array()?
            .iter()
            .map(TraceEntry::from_value)
            .collect();
        let message = non_empty_text(map.get(MESSAGE_KEY));
        Some(Self { message, entries })
    }
}

/// One stack frame of a trace payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TraceEntry {
    pub file: Option<String>,
    /// Number or text as sent; `None` when absent, zero or empty.
    pub line: Option<Value>,
    pub class: String,
    pub call_type: String,
    pub function: String,
    pub args: Vec<TraceArg>,
}

impl TraceEntry {
    /// Lenient extraction: missing or mistyped fields fall back to empty.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| non_empty_text(value.get(key)).unwrap_or_default();
        let line = match value.get("line") {
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(Value::Number(n.clone())),
            Some(Value::String(s)) if !s.is_empty() && s != "0" => Some(Value::String(s.clone())),
            _ => None,
        };
        let args = value
            .get("args")
            .and_then(Value::as_array)
            .map(|args| args.iter().map(TraceArg::from_value).collect())
            .unwrap_or_default();

        Self {
            file: non_empty_text(value.get("file")),
            line,
            class: text("class"),
            call_type: text("type"),
            function: text("function"),
            args,
        }
    }

    /// Call-site string: `<class><type><function>(<args>)`.
    pub fn instruction(&self) -> String {
        let args = self
            .args
            .iter()
            .map(TraceArg::render)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}{}{}({})", self.class, self.call_type, self.function, args)
    }
}

/// Trace call argument.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceArg {
    /// Rendered verbatim.
    Scalar(String),
    /// Arrays and objects; never serialized.
    Composite,
}

impl TraceArg {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(_) | Value::Object(_) => TraceArg::Composite,
            Value::String(s) => TraceArg::Scalar(s.clone()),
            other => TraceArg::Scalar(other.to_string()),
        }
    }

    pub fn render(&self) -> &str {
        match self {
            TraceArg::Scalar(s) => s,
            TraceArg::Composite => COMPOSITE_ARG,
        }
    }
}

fn non_empty_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
