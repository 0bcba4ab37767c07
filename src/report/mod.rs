// src/report/mod.rs
// =============================================================================
// This module turns a LibGuides export into a link report file.
//
// Submodules:
// - scanner: Finds http(s) URLs inside description text
// - traversal: Walks the export and fills a ReportTable with one row per link
// - format: The csv / json / xml output formats and their aliases
//
// This file ties them together into the full run:
//   resolve format -> read + decode -> walk -> render -> write
// Nothing is written unless every earlier step succeeded.
// =============================================================================

mod format;
mod scanner;
mod traversal;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ReportError;
use crate::export::{load_export, Document};
use crate::table::{to_csv, to_json, to_xml, ReportTable};

pub use format::ReportFormat;
pub use scanner::extract_http_links;
pub use traversal::{build_link_report, collect_links, LINK_REPORT_HEADINGS};

/// Site prefix used when the export carries no site record
pub const DEFAULT_SITE_PREFIX: &str = "https://libguides.example.edu";

// Everything a link report run needs to know
#[derive(Debug, Clone)]
pub struct LinkReportOptions {
    /// The LibGuides XML export to read
    pub source: PathBuf,
    /// Where to write the report (replaced if it exists)
    pub destination: PathBuf,
    /// csv, json, xml or html, as typed by the user
    pub format: String,
    /// Write the column names as the first CSV line
    pub header: bool,
    /// Overrides the base URL used for back-links
    pub site_prefix: Option<String>,
}

// Works out the base URL for back-links
//
// Order of preference:
//   1. an explicit override
//   2. https://<site domain> from the export
//   3. DEFAULT_SITE_PREFIX
pub fn site_prefix(doc: &Document, explicit: Option<&str>) -> String {
    if let Some(prefix) = explicit {
        return prefix.trim_end_matches('/').to_string();
    }

    match &doc.site {
        Some(site) if !site.domain.trim().is_empty() => format!("https://{}", site.domain.trim()),
        _ => DEFAULT_SITE_PREFIX.to_string(),
    }
}

// Renders a table in the requested format
pub fn render(table: &ReportTable, format: ReportFormat, header: bool) -> Result<String, ReportError> {
    let out = match format {
        ReportFormat::Csv => to_csv(table, header),
        ReportFormat::Json => to_json(table)?,
        ReportFormat::Xml => to_xml(table)?,
    };
    Ok(out)
}

// Runs a full link report
//
// Returns: the number of links (rows) written
pub fn link_report(options: &LinkReportOptions) -> Result<usize, ReportError> {
    // An unknown format is a configuration mistake; catch it before any work
    let format: ReportFormat = options.format.parse()?;

    let doc = load_export(&options.source)?;
    let prefix = site_prefix(&doc, options.site_prefix.as_deref());
    debug!(site_prefix = %prefix, "resolved site prefix");

    let mut table = build_link_report(&doc, &prefix);
    table.set_caption(format!("Link report for {:?}", options.source.display().to_string()));
    info!(links = table.len(), "collected links");

    let rendered = render(&table, format, options.header)?;
    write_output(&options.destination, &rendered)?;

    info!(path = %options.destination.display(), %format, "wrote link report");
    Ok(table.len())
}

fn write_output(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
