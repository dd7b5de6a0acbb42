//! Remote `TRACE` frames, rebuilt as a `(File, Line, Instruction)` table.

use serde_json::{json, Value};

use fireclient_core::protocol::{Descriptor, Payload, TraceEntry};
use fireclient_core::ParseError;

use crate::console::{Console, TableKind};

pub fn format(
    prefix: &str,
    _descriptor: &Descriptor,
    payload: &Payload,
    console: &dyn Console,
) -> Result<(), ParseError> {
    // Array-like payloads without a `Trace` list render the header row only.
    let (message, entries) = match payload {
        Payload::Trace { record, .. } => (record.message.as_deref(), record.entries.as_slice()),
        Payload::Rows(_) | Payload::Composite(_) => (None, &[][..]),
        Payload::Scalar(_) => return Err(super::not_array(payload)),
    };

    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(json!(["File", "Line", "Instruction"]));
    rows.extend(entries.iter().map(row));

    let label = format!("{prefix} (Trace) {}", message.unwrap_or_default());
    console.table(TableKind::Trace, &label, &rows);
    Ok(())
}

fn row(entry: &TraceEntry) -> Value {
    let file = entry.file.clone().unwrap_or_default();
    let line = entry.line.clone().unwrap_or_else(|| Value::from(""));
    json!([file, line, entry.instruction()])
}
