//! Payload formatters for table-shaped output.
//!
//! Traces are a specialised table view, not a separate transport type: both
//! formatters reject scalar payloads with `TablePayloadNotArray`.

pub mod table;
pub mod trace;

use fireclient_core::protocol::Payload;
use fireclient_core::ParseError;

fn not_array(payload: &Payload) -> ParseError {
    ParseError::TablePayloadNotArray {
        message: payload.to_value().to_string(),
    }
}
