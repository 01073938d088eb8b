//! Writer für Cartographer-JSON-Archive.

use crate::core::MarkerRecord;
use anyhow::Result;
use serde::Serialize;

/// Schreibt einen Workspace-Snapshot als pretty-printed JSON.
///
/// Einrückung ist 3 Leerzeichen; die Feldreihenfolge und ausgelassene
/// optionale Felder sichern Roundtrip-Treue.
pub fn write_cartographer_archive(records: &[MarkerRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"   ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}
