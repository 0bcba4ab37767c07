// src/table/csv.rs
// Comma separated rendering of a ReportTable.

use super::ReportTable;

const DELIMITER: char = ',';
const QUOTE: char = '"';

// Renders the table as CSV
//
// Parameters:
//   table: the table to render
//   header: write the column names as the first line (skipped if there are none)
//
// Every line, including the last, ends with "\n".
pub fn to_csv(table: &ReportTable, header: bool) -> String {
    let mut out = String::new();

    if header && !table.head().is_empty() {
        write_record(&mut out, table.head());
    }
    for row in table.rows() {
        write_record(&mut out, row);
    }

    out
}

fn write_record(out: &mut String, cells: &[String]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        if needs_quotes(cell) {
            out.push(QUOTE);
            out.push_str(&cell.replace(QUOTE, "\"\""));
            out.push(QUOTE);
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

// A cell is quoted when it holds the delimiter, a quote or a line break,
// or starts with any Unicode whitespace a reader might trim.
// A lone `\.` is quoted too: on its own line it is an end-of-data marker
// for some importers.
fn needs_quotes(cell: &str) -> bool {
    if cell == r"\." {
        return true;
    }
    cell.contains([DELIMITER, QUOTE, '\r', '\n']) || cell.chars().next().is_some_and(char::is_whitespace)
}
