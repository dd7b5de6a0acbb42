//! Wildfire protocol modules.
//!
//! A Wildfire message rides in one HTTP response header value:
//! `<length>|[<descriptor>,<payload>]|`.
//! - `frame`: length-prefixed header value -> validated [`frame::Frame`].
//! - `message`: descriptor/payload domain types decoded once at the JSON boundary.
//!
//! Parsers here never index raw buffers or panic: malformed input is reported
//! as `ParseError`, keeping the relay resilient to truncated or hostile headers.

pub mod frame;
pub mod message;

pub use frame::{decode_frame, is_wildfire_header, Frame, PROTOCOL_PREFIX};
pub use message::{Descriptor, MessageKind, Payload, TraceArg, TraceEntry, TraceRecord};
