//! Header schema reading and column-identifier normalization
//!
//! The first normalized line names the export's columns in free text. Each
//! token is normalized into a stable identifier and the result is validated
//! against the required column set before any row is reconstructed.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::REQUIRED_COLUMNS;
use crate::error::{ExchangeError, Result};

// The header line is assumed unquoted, so the separator is a plain comma
// optionally flanked by whitespace.
static HEADER_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").unwrap());
static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9a-z ]+").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Ordered column identifiers parsed from the header line.
///
/// Position is significant: identifier N names field N of every logical row.
/// Built once per parse; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Parse the header line into normalized identifiers and validate that
    /// every required column is present.
    pub fn parse(header_line: &str) -> Result<Self> {
        let columns: Vec<String> = HEADER_SEPARATOR
            .split(header_line)
            .map(normalize_identifier)
            .collect();

        for required in REQUIRED_COLUMNS {
            if !columns.iter().any(|column| column == required) {
                return Err(ExchangeError::Schema {
                    column: (*required).to_string(),
                });
            }
        }

        Ok(Self { columns })
    }

    /// Column identifiers in header-line order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns, which every logical row's field count must equal.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Normalize a free-text header token into a stable identifier.
///
/// Lowercase, runs of non-alphanumeric characters to spaces, trim, then
/// internal whitespace runs to single underscores:
/// `"Buyer Town/City"` -> `buyer_town_city`.
pub fn normalize_identifier(token: &str) -> String {
    let lowered = token.to_lowercase();
    let cleaned = NON_ALPHANUMERIC.replace_all(&lowered, " ");
    WHITESPACE_RUN
        .replace_all(cleaned.trim(), "_")
        .into_owned()
}
