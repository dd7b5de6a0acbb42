//! Remote `TABLE` frames.

use serde_json::Value;

use fireclient_core::protocol::{Descriptor, Payload};
use fireclient_core::ParseError;

use crate::console::{Console, TableKind};

/// Pass a row sequence through to `Console::table`.
///
/// Object payloads contribute their values as rows, in document order. A
/// missing `Label` is reported as a warning and drops this frame only.
pub fn format(
    prefix: &str,
    descriptor: &Descriptor,
    payload: &Payload,
    console: &dyn Console,
) -> Result<(), ParseError> {
    let rows: Vec<Value> = match payload {
        Payload::Rows(rows) => rows.clone(),
        Payload::Trace { raw, .. } | Payload::Composite(raw) => raw.values().cloned().collect(),
        Payload::Scalar(_) => return Err(super::not_array(payload)),
    };

    let Some(label) = descriptor.label.as_deref() else {
        console.warn(&format!(
            "{prefix} Unable to read descriptor label: {}",
            descriptor.to_value()
        ));
        return Ok(());
    };

    console.table(TableKind::Table, &format!("{prefix} {label}"), &rows);
    Ok(())
}
