//! Console sink contract and stock implementations.
//!
//! The relay never owns a console: callers construct one and hand it to the
//! scanner or observer. Implementations shared across threads handle their
//! own synchronisation.

pub mod memory;
pub mod traced;

use serde_json::Value;

pub use memory::{ConsoleCall, MemoryConsole};
pub use traced::TracingConsole;

/// Single-line message severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Log,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Log => "log",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// Origin of a table handed to [`Console::table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Remote `TABLE` payload, rows passed through.
    Table,
    /// Remote `TRACE` payload rebuilt as rows.
    Trace,
    /// Local summary of the HTTP exchange.
    Request,
}

impl TableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TableKind::Table => "table",
            TableKind::Trace => "trace",
            TableKind::Request => "request",
        }
    }
}

/// Capability set the relay writes to.
pub trait Console: Send + Sync {
    fn log(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);

    /// Render a label plus rows; the first row is conventionally a header.
    fn table(&self, kind: TableKind, label: &str, rows: &[Value]);

    /// Emit a single line at `severity`.
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Log => self.log(message),
            Severity::Info => self.info(message),
            Severity::Warn => self.warn(message),
            Severity::Error => self.error(message),
        }
    }
}
