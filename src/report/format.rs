// src/report/format.rs
// The output formats a link report can be written in, and the names users
// may type for them.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Comma separated values
    Csv,
    /// A JSON object with caption, head and body
    Json,
    /// An HTML <table>, which is also well formed XML
    Xml,
}

impl ReportFormat {
    // Guesses the format from a file extension, e.g. "links.html" -> Xml
    //
    // Returns None when the path has no extension or we don't know it.
    pub fn from_extension(path: &Path) -> Option<ReportFormat> {
        let ext = path.extension()?.to_str()?;
        format!(".{}", ext).parse().ok()
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    // Accepts csv, json, xml and html, with or without a leading dot, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" | ".csv" => Ok(ReportFormat::Csv),
            "json" | ".json" => Ok(ReportFormat::Json),
            "xml" | ".xml" | "html" | ".html" => Ok(ReportFormat::Xml),
            _ => Err(ReportError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Xml => "xml",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        assert_eq!("csv".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
        assert_eq!("CSV".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
        assert_eq!(".json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("Json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("xml".parse::<ReportFormat>().unwrap(), ReportFormat::Xml);
        assert_eq!("HTML".parse::<ReportFormat>().unwrap(), ReportFormat::Xml);
        assert_eq!(".html".parse::<ReportFormat>().unwrap(), ReportFormat::Xml);
    }

    #[test]
    fn test_unknown_format_is_an_error() {
        let err = "yaml".parse::<ReportFormat>().unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedFormat(ref f) if f == "yaml"));
        assert!(err.to_string().contains("\"yaml\""));
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(ReportFormat::from_extension(Path::new("out/links.HTML")), Some(ReportFormat::Xml));
        assert_eq!(ReportFormat::from_extension(Path::new("links.csv")), Some(ReportFormat::Csv));
        assert_eq!(ReportFormat::from_extension(Path::new("links.txt")), None);
        assert_eq!(ReportFormat::from_extension(Path::new("links")), None);
    }
}
