// src/lib.rs
// =============================================================================
// guide-export: read LibGuides XML exports, convert them to JSON and report
// every link they contain.
//
// Modules:
// - export: The export's data model, XML decoding and JSON re-encoding
// - report: Link scanning, the export walk and the report pipeline
// - table: The report table and its csv / json / xml renderers
// - error: The error type shared by all of the above
//
// The binary (src/main.rs) is a thin command-line layer over this library.
// =============================================================================

pub mod error;
pub mod export;
pub mod report;
pub mod table;

pub use error::ReportError;
