// src/table/json.rs
// JSON rendering of a ReportTable.

use serde::Serialize;

use super::ReportTable;

// Renders the table as a tab indented JSON object
//
// Shape:
//   {"caption": "...", "head": ["URL", ...], "body": [["...", ...], ...]}
//
// "caption" is always written; "head" and "body" are left out when empty.
pub fn to_json(table: &ReportTable) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    table.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
