//! Shared error types across FireClient crates.

use thiserror::Error;

/// Stable codes for frame parse failures (used by logs and test vectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorCode {
    /// Declared length does not match the body.
    BadSize,
    /// Length prefix is not a decimal number.
    InvalidSizePrefix,
    /// Body is not JSON (or is `null`).
    UndecodableBody,
    /// Body is not a `[descriptor, payload]` pair.
    WrongComponentCount,
    /// Descriptor has no `Type`.
    MissingType,
    /// Table or trace payload is a scalar.
    TablePayloadNotArray,
    /// `Type` names a kind nobody handles.
    UnhandledType,
}

impl ParseErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ParseErrorCode::BadSize => "BAD_SIZE",
            ParseErrorCode::InvalidSizePrefix => "INVALID_SIZE_PREFIX",
            ParseErrorCode::UndecodableBody => "UNDECODABLE_BODY",
            ParseErrorCode::WrongComponentCount => "WRONG_COMPONENT_COUNT",
            ParseErrorCode::MissingType => "MISSING_TYPE",
            ParseErrorCode::TablePayloadNotArray => "TABLE_PAYLOAD_NOT_ARRAY",
            ParseErrorCode::UnhandledType => "UNHANDLED_TYPE",
        }
    }
}

/// Failure to turn one Wildfire header value into console output.
///
/// The display strings are the messages relayed to the console sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Body does not match expected size, expected {expected_size} vs actual {actual_size}")]
    BadSize {
        expected_size: usize,
        actual_size: usize,
    },
    #[error("Line size prefix is not a decimal length: {prefix}")]
    InvalidSizePrefix { prefix: String },
    #[error("Unable to decode line payload: {line}")]
    UndecodableBody { line: String },
    #[error("Line does not contain expected 2 components: {line}")]
    WrongComponentCount { line: String },
    #[error("Line descriptor does not contain type: {line}")]
    MissingType { line: String },
    #[error("Table requires an array: {message}")]
    TablePayloadNotArray { message: String },
    #[error("Unhandled message type: {message_type}")]
    UnhandledType { message_type: String },
}

impl ParseError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ParseErrorCode {
        match self {
            ParseError::BadSize { .. } => ParseErrorCode::BadSize,
            ParseError::InvalidSizePrefix { .. } => ParseErrorCode::InvalidSizePrefix,
            ParseError::UndecodableBody { .. } => ParseErrorCode::UndecodableBody,
            ParseError::WrongComponentCount { .. } => ParseErrorCode::WrongComponentCount,
            ParseError::MissingType { .. } => ParseErrorCode::MissingType,
            ParseError::TablePayloadNotArray { .. } => ParseErrorCode::TablePayloadNotArray,
            ParseError::UnhandledType { .. } => ParseErrorCode::UnhandledType,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FireClientError>;

/// Errors outside the per-frame path: configuration and adapters.
#[derive(Debug, Error)]
pub enum FireClientError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("bad response: {0}")]
    BadResponse(String),
    #[error("internal: {0}")]
    Internal(String),
}
