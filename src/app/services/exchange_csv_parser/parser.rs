//! Core sales history parser implementation
//!
//! This module provides the main parser orchestration: one synchronous
//! sequential pass over the file, normalize -> schema -> trailer ->
//! reconstruct -> rationalize. Any structural anomaly aborts the parse;
//! partial results are never returned.

use std::path::Path;
use tracing::{debug, info};

use super::normalizer;
use super::rationalizer;
use super::reconstructor;
use super::schema::Schema;
use super::stats::{ParseResult, ParseStats};
use super::trailer::Trailer;
use crate::config::ParserConfig;
use crate::error::{ExchangeError, Result};

/// Parser for vendor sales history file-exchange exports.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExchangeCsvParser {
    config: ParserConfig,
}

impl ExchangeCsvParser {
    /// Create a new parser for the configured regional variant.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a sales history export file.
    ///
    /// The file handle is acquired once and released as soon as the bytes
    /// are in memory; every later stage works on owned data.
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("parsing sales history file: {}", file_path.display());

        let bytes = std::fs::read(file_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ExchangeError::InputNotFound {
                path: file_path.to_path_buf(),
            },
            _ => ExchangeError::Io(e),
        })?;

        self.parse_bytes(&bytes)
    }

    /// Parse export bytes already read from the vendor file.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<ParseResult> {
        let region = self.config.region;
        let mut stats = ParseStats::new();

        let lines = normalizer::normalize(bytes, region)?;
        stats.physical_lines = lines.len();
        debug!("normalized {} non-blank lines", lines.len());

        let schema = Schema::parse(lines.first().map(String::as_str).unwrap_or(""))?;
        debug!("schema: {} columns", schema.len());

        let trailer = Trailer::parse(&lines)?;
        debug!(
            "trailer: {} record(s) declared by seller {}",
            trailer.record_count, trailer.seller_id
        );

        // The header and the two trailer lines are not row data
        let data_lines: &[String] = if lines.len() >= 3 {
            &lines[1..lines.len() - 2]
        } else {
            &[]
        };

        let rows = reconstructor::reconstruct(data_lines, &schema)?;
        stats.logical_rows = rows.len();

        if rows.len() != trailer.record_count {
            return Err(ExchangeError::Trailer {
                reason: format!(
                    "declared record count {} does not match {} reconstructed row(s)",
                    trailer.record_count,
                    rows.len()
                ),
            });
        }

        let orders = rationalizer::rationalize(&rows, region, &mut stats)?;
        stats.orders_parsed = orders.len();
        stats.items_parsed = orders.iter().map(|order| order.line_items.len()).sum();

        info!(
            "parsed {} order(s) with {} line item(s) from {} record(s)",
            stats.orders_parsed, stats.items_parsed, stats.logical_rows
        );

        Ok(ParseResult {
            orders,
            record_count: trailer.record_count,
            seller_id: trailer.seller_id,
            stats,
        })
    }
}
