//! Wildfire header value decoding (panic-free).
//!
//! Decoding rules:
//! - The decimal prefix before the first `|` must equal the byte length of
//!   the body between the pipes, exactly.
//! - The body must be a JSON array `[descriptor, payload]`.
//! - The descriptor must carry a `Type`.

use serde_json::Value;

use crate::error::ParseError;
use crate::protocol::message::{Descriptor, MessageKind, Payload};

/// Header names containing this marker carry Wildfire frames.
pub const PROTOCOL_PREFIX: &str = "X-Wf-";

const SEPARATOR: char = '|';

/// One decoded Wildfire message.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Metadata object (`Type`, `Label`, `File`, ...).
    pub descriptor: Descriptor,
    /// Message body, classified by shape.
    pub payload: Payload,
}

impl Frame {
    /// Message kind read from the descriptor.
    pub fn kind(&self) -> &MessageKind {
        &self.descriptor.kind
    }

    /// Rebuild the `[descriptor, payload]` JSON pair.
    pub fn to_value(&self) -> Value {
        Value::Array(vec![self.descriptor.to_value(), self.payload.to_value()])
    }
}

/// Whether a header name carries Wildfire frames.
///
/// Containment, not an exact match, and ASCII case-insensitive: HTTP stacks
/// are free to normalise header name case (the `http` crate lowercases).
pub fn is_wildfire_header(name: &str) -> bool {
    let marker = PROTOCOL_PREFIX.as_bytes();
    name.as_bytes()
        .windows(marker.len())
        .any(|w| w.eq_ignore_ascii_case(marker))
}

/// Decode a single Wildfire header value.
pub fn decode_frame(raw: &str) -> Result<Frame, ParseError> {
    let Some((prefix, rest)) = raw.split_once(SEPARATOR) else {
        return Err(ParseError::InvalidSizePrefix {
            prefix: raw.to_string(),
        });
    };

    let expected_size = parse_size_prefix(prefix)?;
    let body = rest.trim_matches(SEPARATOR);
    let actual_size = body.len();

    if actual_size != expected_size {
        return Err(ParseError::BadSize {
            expected_size,
            actual_size,
        });
    }

    let decoded: Value = match serde_json::from_str(body) {
        Ok(Value::Null) | Err(_) => {
            return Err(ParseError::UndecodableBody {
                line: raw.to_string(),
            })
        }
        Ok(v) => v,
    };

    let mut components = match decoded {
        Value::Array(items) if items.len() == 2 => items.into_iter(),
        _ => {
            return Err(ParseError::WrongComponentCount {
                line: raw.to_string(),
            })
        }
    };

    // Length checked above; both are present.
    let (Some(descriptor), Some(payload)) = (components.next(), components.next()) else {
        return Err(ParseError::WrongComponentCount {
            line: raw.to_string(),
        });
    };

    let descriptor = match descriptor {
        Value::Object(fields) => Descriptor::from_fields(fields),
        _ => None,
    }
    .ok_or_else(|| ParseError::MissingType {
        line: raw.to_string(),
    })?;

    tracing::trace!(size = expected_size, kind = %descriptor.kind, "decoded wildfire frame");

    Ok(Frame {
        descriptor,
        payload: Payload::classify(payload),
    })
}

fn parse_size_prefix(prefix: &str) -> Result<usize, ParseError> {
    let invalid = || ParseError::InvalidSizePrefix {
        prefix: prefix.to_string(),
    };

    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    prefix.parse::<usize>().map_err(|_| invalid())
}
