//! Command-line argument definitions for the sales history parser
//!
//! This module defines the CLI interface using the clap derive API. The
//! command layer is a thin collaborator around the library: it hands a file
//! path to the parser and displays or exports the result.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Region;

/// CLI arguments for the sales history parser
#[derive(Debug, Clone, Parser)]
#[command(
    name = "saleshistory-parser",
    version,
    about = "Parse vendor sales history file-exchange exports into structured order records",
    long_about = "Parses the vendor's non-standard sales history CSV export: repairs \
                  inconsistent quoting, reconstructs records that span multiple physical \
                  lines, validates the header and trailer, and groups flat rows into \
                  orders with their line items."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the sales history parser
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse an export and print the result
    Parse(ParseArgs),
    /// Check an export for structural validity without printing records
    Validate(ValidateArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Path to the sales history export file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Regional schema variant of the export
    #[arg(short, long, value_name = "REGION", default_value = "uk")]
    pub region: Region,

    /// Output format for the parsed result
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Path to the sales history export file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Regional schema variant of the export
    #[arg(short, long, value_name = "REGION", default_value = "uk")]
    pub region: Region,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output formats for parsed results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary of the parse
    Summary,
    /// Orders as pretty-printed JSON
    Json,
}
