use fireclient_core::protocol::{Frame, MessageKind};
use fireclient_core::ParseError;

use crate::console::{Console, Severity};
use crate::format::{table, trace};

/// Routes decoded frames to the console by message kind.
///
/// Every successful dispatch makes exactly one console call; failures make
/// none and are returned to the caller for reporting.
#[derive(Debug, Clone)]
pub struct MessageDispatcher {
    remote_prefix: String,
}

impl MessageDispatcher {
    pub fn new(remote_prefix: impl Into<String>) -> Self {
        Self {
            remote_prefix: remote_prefix.into(),
        }
    }

    pub fn remote_prefix(&self) -> &str {
        &self.remote_prefix
    }

    pub fn dispatch(&self, console: &dyn Console, frame: &Frame) -> Result<(), ParseError> {
        let prefix = self.remote_prefix.as_str();
        let (descriptor, payload) = (&frame.descriptor, &frame.payload);

        let severity = match frame.kind() {
            MessageKind::Table => return table::format(prefix, descriptor, payload, console),
            MessageKind::Trace => return trace::format(prefix, descriptor, payload, console),
            MessageKind::Log => Severity::Log,
            MessageKind::Info => Severity::Info,
            MessageKind::Warn => Severity::Warn,
            MessageKind::Error => Severity::Error,
            MessageKind::Unhandled(tag) => {
                return Err(ParseError::UnhandledType {
                    message_type: tag.clone(),
                })
            }
        };

        console.emit(severity, &format!("{prefix} {}", payload.render_text()));
        Ok(())
    }
}
