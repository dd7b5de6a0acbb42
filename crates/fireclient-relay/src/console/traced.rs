//! Console that forwards relayed output to `tracing`.
//!
//! Events use the `fireclient::remote` target so subscribers can filter
//! remote output separately (`RUST_LOG=fireclient::remote=info`).

use serde_json::Value;

use super::{Console, TableKind};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingConsole;

impl TracingConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TracingConsole {
    fn log(&self, message: &str) {
        tracing::info!(target: "fireclient::remote", severity = "log", "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "fireclient::remote", severity = "info", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "fireclient::remote", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "fireclient::remote", "{message}");
    }

    fn table(&self, kind: TableKind, label: &str, rows: &[Value]) {
        tracing::info!(target: "fireclient::remote", kind = kind.as_str(), rows = rows.len(), "{label}");
        for row in rows {
            tracing::info!(target: "fireclient::remote", "  {}", render_row(row));
        }
    }
}

fn render_row(row: &Value) -> String {
    match row {
        Value::Array(cells) => cells.iter().map(render_cell).collect::<Vec<_>>().join(" | "),
        other => render_cell(other),
    }
}

fn render_cell(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
