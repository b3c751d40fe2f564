//! Trailer extraction from the final two lines of the export
//!
//! The export does not end with data: the second-to-last normalized line
//! declares how many records were downloaded and the last line names the
//! seller account. Both are metadata used for validation, never row data.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ExchangeError, Result};

static RECORD_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+), record\(s\) downloaded,from").unwrap());
static SELLER_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Seller ID: (.+)$").unwrap());

/// Metadata carried by the final two lines of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trailer {
    /// Number of records the vendor claims the file contains.
    pub record_count: usize,

    /// Seller account identifier, usually an email address.
    pub seller_id: String,
}

impl Trailer {
    /// Extract the trailer from the full normalized line sequence.
    pub fn parse(lines: &[String]) -> Result<Self> {
        if lines.len() < 2 {
            return Err(ExchangeError::Trailer {
                reason: format!(
                    "expected a record-count line and a seller line, found {} line(s)",
                    lines.len()
                ),
            });
        }

        let count_line = &lines[lines.len() - 2];
        let seller_line = &lines[lines.len() - 1];

        let captures = RECORD_COUNT
            .captures(count_line)
            .ok_or_else(|| ExchangeError::Trailer {
                reason: format!(
                    "record-count line does not match '<count>, record(s) downloaded,from ...': {count_line:?}"
                ),
            })?;
        let record_count = captures[1]
            .parse::<usize>()
            .map_err(|e| ExchangeError::Trailer {
                reason: format!("record count out of range: {e}"),
            })?;

        let captures = SELLER_ID
            .captures(seller_line)
            .ok_or_else(|| ExchangeError::Trailer {
                reason: format!("seller line does not match 'Seller ID: ...': {seller_line:?}"),
            })?;
        let seller_id = captures[1].trim().to_string();

        Ok(Self {
            record_count,
            seller_id,
        })
    }
}
