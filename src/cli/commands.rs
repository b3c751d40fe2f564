//! Command implementations for the sales history parser CLI
//!
//! Contains the command execution logic, logging setup, and result
//! reporting. All parsing is delegated to the library.

use anyhow::Context;
use colored::Colorize;
use std::path::Path;

use crate::app::services::exchange_csv_parser::{ExchangeCsvParser, ParseResult};
use crate::cli::args::{Args, Commands, OutputFormat, ParseArgs, ValidateArgs};
use crate::config::ParserConfig;

/// Main command runner for the sales history parser.
pub fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Commands::Parse(parse_args) => run_parse(parse_args),
        Commands::Validate(validate_args) => run_validate(validate_args),
    }
}

fn run_parse(args: ParseArgs) -> anyhow::Result<()> {
    setup_logging(args.verbose);

    let parser = ExchangeCsvParser::new(ParserConfig::new(args.region));
    let result = parser
        .parse_file(&args.input)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;

    match args.format {
        OutputFormat::Summary => print_summary(&args.input, &result),
        OutputFormat::Json => print_json(&result)?,
    }

    Ok(())
}

fn run_validate(args: ValidateArgs) -> anyhow::Result<()> {
    setup_logging(args.verbose);

    let parser = ExchangeCsvParser::new(ParserConfig::new(args.region));
    let result = parser
        .parse_file(&args.input)
        .with_context(|| format!("{}", args.input.display()))?;

    println!(
        "{} {} ({} orders, {} line items, seller {})",
        "OK".green().bold(),
        args.input.display(),
        result.orders.len(),
        result.stats.items_parsed,
        result.seller_id
    );
    Ok(())
}

fn print_summary(input: &Path, result: &ParseResult) {
    println!("{}", "Sales History Parse Summary".bold());
    println!("  File:        {}", input.display());
    println!("  Seller:      {}", result.seller_id);
    println!("  Records:     {}", result.record_count);
    println!(
        "  Orders:      {}",
        result.orders.len().to_string().green()
    );
    println!("  Line items:  {}", result.stats.items_parsed);
    if result.stats.orphaned_items > 0 {
        println!(
            "  {}  {}",
            "Orphaned items:".yellow(),
            result.stats.orphaned_items
        );
    }
}

fn print_json(result: &ParseResult) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&result.orders)?);
    Ok(())
}

/// Set up structured logging to stderr.
fn setup_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("saleshistory_parser={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
