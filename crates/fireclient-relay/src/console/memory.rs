//! In-memory console that records every call.

use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use super::{Console, Severity, TableKind};

/// One recorded console call.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCall {
    Line {
        severity: Severity,
        message: String,
    },
    Table {
        kind: TableKind,
        label: String,
        rows: Vec<Value>,
    },
}

#[derive(Debug, Default)]
pub struct MemoryConsole {
    calls: Mutex<Vec<ConsoleCall>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded calls, oldest first.
    pub fn calls(&self) -> Vec<ConsoleCall> {
        self.lock().clone()
    }

    /// Drain recorded calls.
    pub fn take(&self) -> Vec<ConsoleCall> {
        std::mem::take(&mut *self.lock())
    }

    /// Messages recorded at `severity`.
    pub fn lines(&self, severity: Severity) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|c| match c {
                ConsoleCall::Line { severity: s, message } if *s == severity => {
                    Some(message.clone())
                }
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ConsoleCall>> {
        // A panicking recorder leaves the log intact.
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push_line(&self, severity: Severity, message: &str) {
        self.lock().push(ConsoleCall::Line {
            severity,
            message: message.to_string(),
        });
    }
}

impl Console for MemoryConsole {
    fn log(&self, message: &str) {
        self.push_line(Severity::Log, message);
    }

    fn info(&self, message: &str) {
        self.push_line(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push_line(Severity::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push_line(Severity::Error, message);
    }

    fn table(&self, kind: TableKind, label: &str, rows: &[Value]) {
        self.lock().push(ConsoleCall::Table {
            kind,
            label: label.to_string(),
            rows: rows.to_vec(),
        });
    }
}
