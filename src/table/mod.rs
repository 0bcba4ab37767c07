// src/table/mod.rs
// =============================================================================
// A simple in-memory table: a caption, a row of column headings and a list of
// rows of string cells.
//
// The table only ever grows. Once filled it can be rendered three ways:
// - csv: comma separated text, optional heading line
// - xml: an HTML-style <table> element tree
// - json: {"caption": ..., "head": [...], "body": [[...], ...]}
//
// Each renderer is a plain function taking &ReportTable, so they can't
// change the table and always see the same cells.
// =============================================================================

mod csv;
mod json;
mod xml;

use serde::Serialize;

pub use self::csv::to_csv;
pub use self::json::to_json;
pub use self::xml::to_xml;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    /// Informational title, always present in JSON even when empty
    caption: String,
    /// Column names
    #[serde(skip_serializing_if = "Vec::is_empty")]
    head: Vec<String>,
    /// Data rows, in the order they were appended
    #[serde(skip_serializing_if = "Vec::is_empty")]
    body: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    // Adds column names after any existing ones
    pub fn append_headings<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.head.extend(cells.into_iter().map(Into::into));
    }

    // Adds one row to the end of the table
    pub fn append_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn head(&self) -> &[String] {
        &self.head
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_building() {
        let mut table = ReportTable::new();
        table.set_caption("This is a table");
        table.append_headings(["One", "Two", "Three"]);
        table.append_row(["1", "2", "3"]);
        table.append_row(vec!["4".to_string(), "5".to_string(), "6".to_string()]);

        assert_eq!(table.caption(), "This is a table");
        assert_eq!(table.head(), ["One", "Two", "Three"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0], ["1", "2", "3"]);
        assert_eq!(table.rows()[1], ["4", "5", "6"]);
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = ReportTable::new();
        assert!(table.is_empty());
        assert_eq!(table.caption(), "");
        assert!(table.head().is_empty());
    }
}
