//! Parser for vendor sales history file-exchange exports
//!
//! This module recovers well-formed order records from a malformed,
//! quote-inconsistent, multi-line CSV export. The format is vendor-specific:
//! empty fields may be unquoted, quoted fields may contain embedded line
//! breaks, and the final two lines carry a record count and seller
//! identifier instead of data.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and file handling
//! - [`normalizer`] - Legacy-encoding decode and empty-field quoting repair
//! - [`schema`] - Header tokenization and required-column validation
//! - [`trailer`] - Record count and seller identifier extraction
//! - [`reconstructor`] - Logical-row recovery from multi-line records
//! - [`rationalizer`] - Reverse-order grouping into orders and line items
//! - [`field_parsers`] - Typed field conversion utilities
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use saleshistory_parser::app::services::exchange_csv_parser::ExchangeCsvParser;
//! use saleshistory_parser::config::ParserConfig;
//!
//! # fn example() -> saleshistory_parser::Result<()> {
//! let parser = ExchangeCsvParser::new(ParserConfig::default());
//! let result = parser.parse_file(std::path::Path::new("sales.csv"))?;
//!
//! println!("Parsed {} orders for seller {}",
//!          result.orders.len(),
//!          result.seller_id);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod normalizer;
pub mod parser;
pub mod rationalizer;
pub mod reconstructor;
pub mod schema;
pub mod stats;
pub mod trailer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::ExchangeCsvParser;
pub use reconstructor::Row;
pub use schema::Schema;
pub use stats::{ParseResult, ParseStats};
pub use trailer::Trailer;
