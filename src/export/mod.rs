// src/export/mod.rs
// =============================================================================
// This module reads LibGuides XML exports and re-encodes them as JSON.
//
// Submodules:
// - model: The Document tree (customer, site, guides, pages, boxes, ...)
// - decode: serde helpers for the export's wrapped lists and empty integers
//
// The rest of the program only ever reads a Document; nothing here mutates
// the tree after it has been decoded.
// =============================================================================

mod decode;
mod model;

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ReportError;

pub use model::{
    Account, Asset, Customer, Document, Group, Guide, GuideBox, Owner, Page, Pane, Site, Subject,
    Tag, Vendor,
};

impl Document {
    // Decodes the text of a LibGuides XML export
    pub fn from_xml(src: &str) -> Result<Document, quick_xml::DeError> {
        quick_xml::de::from_str(src)
    }

    // Renders the document as JSON indented with four spaces
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

// Reads and decodes an export file
//
// Returns: the Document, or a Read/Decode error naming the file
pub fn load_export(path: &Path) -> Result<Document, ReportError> {
    let src = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = Document::from_xml(&src).map_err(|source| ReportError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        guides = doc.guides.len(),
        accounts = doc.accounts.len(),
        groups = doc.groups.len(),
        subjects = doc.subjects.len(),
        "decoded export"
    );

    Ok(doc)
}

// Converts an XML export file into a JSON file
//
// The destination is replaced if it already exists.
pub fn export_to_json(src: &Path, dest: &Path) -> Result<(), ReportError> {
    let doc = load_export(src)?;
    let json = doc.to_json()?;

    debug!(bytes = json.len(), "encoded export as JSON");

    fs::write(dest, json).map_err(|source| ReportError::Write {
        path: dest.to_path_buf(),
        source,
    })?;

    info!(path = %dest.display(), "wrote JSON export");
    Ok(())
}
