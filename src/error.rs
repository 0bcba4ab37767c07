// src/error.rs
// =============================================================================
// Error types for reading exports and writing reports.
//
// Every variant that touches the filesystem carries the path involved, so a
// message like "failed to read export.xml: No such file or directory" is
// enough to diagnose the problem without a debugger.
//
// Rust concepts:
// - thiserror: Derives Display and std::error::Error for our enum
// - #[source]: Links an underlying error so callers can walk the chain
// =============================================================================

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The export (or any input file) could not be read
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The export was read but is not a well-formed LibGuides export
    #[error("failed to decode {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    /// The caller asked for a report format we don't know
    #[error("{0:?} is not a supported format (expected csv, json, xml or html)")]
    UnsupportedFormat(String),

    /// Building the XML (HTML) envelope failed
    #[error("failed to render XML report")]
    Render(#[from] std::io::Error),

    /// Building a JSON document failed
    #[error("failed to encode JSON")]
    Json(#[from] serde_json::Error),

    /// The rendered output could not be written
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
