// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (quiet by default, --verbose for progress)
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = error)
//
// The real work lives in the library (src/lib.rs); this file only turns
// command-line arguments into library calls and errors into exit codes.
// =============================================================================

mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use guide_export::export;
use guide_export::report::{self, LinkReportOptions, ReportFormat};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so they never mix with anything written to stdout
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::ToJson { source, destination } => handle_to_json(&source, &destination),
        Commands::Links { source, destination, format, no_header, site_prefix } => {
            let format = format.unwrap_or_else(|| default_format(&destination));
            let options = LinkReportOptions {
                source,
                destination,
                format,
                header: !no_header,
                site_prefix,
            };
            handle_links(&options)
        }
    }
}

// Handles the 'to-json' subcommand
fn handle_to_json(source: &Path, destination: &Path) -> Result<()> {
    export::export_to_json(source, destination)
        .with_context(|| format!("converting {} to JSON", source.display()))?;

    println!("✅ Wrote {}", destination.display());
    Ok(())
}

// Handles the 'links' subcommand
fn handle_links(options: &LinkReportOptions) -> Result<()> {
    let count = report::link_report(options)
        .with_context(|| format!("building link report for {}", options.source.display()))?;

    println!("🔗 {} link(s) written to {}", count, options.destination.display());
    Ok(())
}

// Picks the format from the destination's extension, falling back to csv
fn default_format(destination: &Path) -> String {
    ReportFormat::from_extension(destination)
        .unwrap_or(ReportFormat::Csv)
        .to_string()
}
