// src/table/xml.rs
// =============================================================================
// XML (HTML) rendering of a ReportTable.
//
// The output is a tab indented HTML table, so it can be opened directly in a
// browser or processed as XML:
//
//   <table>
//       <caption>Link report</caption>
//       <thead>
//           <tr>
//               <th>URL</th>
//               ...
//           </tr>
//       </thead>
//       <tbody>
//           <tr>
//               <td>https://example.edu</td>
//               ...
//           </tr>
//       </tbody>
//   </table>
//
// We drive quick-xml's event Writer by hand; it takes care of escaping cell
// text and of the indentation.
// =============================================================================

use std::io;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::ReportTable;

// Renders the table as an indented <table> element
pub fn to_xml(table: &ReportTable) -> io::Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);

    start(&mut writer, "table")?;
    text_element(&mut writer, "caption", table.caption())?;

    start(&mut writer, "thead")?;
    row(&mut writer, "th", table.head())?;
    end(&mut writer, "thead")?;

    start(&mut writer, "tbody")?;
    for cells in table.rows() {
        row(&mut writer, "td", cells)?;
    }
    end(&mut writer, "tbody")?;

    end(&mut writer, "table")?;

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

// Writes <tr> with one `cell_tag` element per cell
fn row(writer: &mut Writer<Vec<u8>>, cell_tag: &str, cells: &[String]) -> io::Result<()> {
    start(writer, "tr")?;
    for cell in cells {
        text_element(writer, cell_tag, cell)?;
    }
    end(writer, "tr")
}

fn text_element(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> io::Result<()> {
    start(writer, tag)?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    end(writer, tag)
}

fn start(writer: &mut Writer<Vec<u8>>, tag: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))
}

fn end(writer: &mut Writer<Vec<u8>>, tag: &str) -> io::Result<()> {
    writer.write_event(Event::End(BytesEnd::new(tag)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::Reader;

    // Reads every text node inside a given element name, in document order
    fn texts_of(xml: &str, tag: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        let mut inside = false;
        let mut found = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == tag.as_bytes() => {
                    inside = true;
                    found.push(String::new());
                }
                Event::End(e) if e.name().as_ref() == tag.as_bytes() => inside = false,
                Event::Text(t) if inside => {
                    if let Some(last) = found.last_mut() {
                        last.push_str(&t.unescape().unwrap());
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }
        found
    }

    fn sample_table() -> ReportTable {
        let mut table = ReportTable::new();
        table.set_caption("Links");
        table.append_headings(["URL", "Id"]);
        table.append_row(["https://a.edu/?x=1&amp;y=2", "1 of 2"]);
        table.append_row(["https://b.edu/<b>", "2 of 2"]);
        table
    }

    #[test]
    fn test_xml_layout() {
        let mut table = ReportTable::new();
        table.set_caption("Links");
        table.append_headings(["URL"]);
        table.append_row(["https://a.edu"]);

        let xml = to_xml(&table).unwrap();
        let expected = "<table>\n\
                        \t<caption>Links</caption>\n\
                        \t<thead>\n\
                        \t\t<tr>\n\
                        \t\t\t<th>URL</th>\n\
                        \t\t</tr>\n\
                        \t</thead>\n\
                        \t<tbody>\n\
                        \t\t<tr>\n\
                        \t\t\t<td>https://a.edu</td>\n\
                        \t\t</tr>\n\
                        \t</tbody>\n\
                        </table>";
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_xml_cells_unchanged() {
        let table = sample_table();
        let xml = to_xml(&table).unwrap();

        assert_eq!(texts_of(&xml, "caption"), vec!["Links"]);
        assert_eq!(texts_of(&xml, "th"), table.head());
        let cells: Vec<String> = table.rows().iter().flatten().cloned().collect();
        assert_eq!(texts_of(&xml, "td"), cells);
    }

    #[test]
    fn test_xml_escapes_markup() {
        let xml = to_xml(&sample_table()).unwrap();
        assert!(xml.contains("https://b.edu/&lt;b&gt;"));
        assert!(!xml.contains("<b>"));
    }

    #[test]
    fn test_xml_is_idempotent() {
        let table = sample_table();
        assert_eq!(to_xml(&table).unwrap(), to_xml(&table).unwrap());
    }
}
