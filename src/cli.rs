// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
//   guide-export to-json SOURCE DEST
//   guide-export links SOURCE DEST [--format csv|json|xml|html] [--no-header]
//
// We use clap's "derive" API: the structs and enums below *are* the CLI
// definition, and clap generates the parsing and --help output from them.
// =============================================================================

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "guide-export",
    version,
    about = "Convert LibGuides XML exports to JSON and report the links they contain",
    long_about = "guide-export reads the XML export of a LibGuides site. It can re-encode the \
                  whole export as JSON, or walk it and list every link found, including links \
                  buried in page and asset descriptions, with a pointer back to the page that holds them."
)]
pub struct Cli {
    /// Log progress to stderr (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a LibGuides XML export to JSON
    ///
    /// Example: guide-export to-json LibGuides_export_221133.xml LibGuides_export_221133.json
    ToJson {
        /// LibGuides XML export to read
        source: PathBuf,

        /// JSON file to write (replaced if it exists)
        destination: PathBuf,
    },

    /// Report every link found in a LibGuides XML export
    ///
    /// Example: guide-export links LibGuides_export_221133.xml links.csv
    Links {
        /// LibGuides XML export to read
        source: PathBuf,

        /// Report file to write (replaced if it exists)
        destination: PathBuf,

        /// Output format: csv, json, xml or html (case-insensitive)
        ///
        /// When left out, the destination's extension is used if it names
        /// one of these formats, otherwise csv.
        #[arg(short, long)]
        format: Option<String>,

        /// Leave the column names out of CSV output
        #[arg(long)]
        no_header: bool,

        /// Base URL for back-links, e.g. https://libguides.example.edu
        ///
        /// Defaults to https://<site domain> from the export.
        #[arg(long, value_name = "URL")]
        site_prefix: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_links() {
        let cli = Cli::parse_from([
            "guide-export",
            "links",
            "export.xml",
            "links.json",
            "--format",
            "JSON",
            "--no-header",
        ]);
        match cli.command {
            Commands::Links { source, destination, format, no_header, site_prefix } => {
                assert_eq!(source, PathBuf::from("export.xml"));
                assert_eq!(destination, PathBuf::from("links.json"));
                assert_eq!(format.as_deref(), Some("JSON"));
                assert!(no_header);
                assert!(site_prefix.is_none());
            }
            other => panic!("expected links, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_to_json_verbose() {
        let cli = Cli::parse_from(["guide-export", "to-json", "in.xml", "out.json", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::ToJson { .. }));
    }
}
