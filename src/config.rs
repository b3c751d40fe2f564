//! Configuration for the sales history parser.
//!
//! The only configurable aspect of a parse is the regional schema variant,
//! which selects the legacy text encoding and the local date format. Exactly
//! one variant is supported; anything else is rejected before any parsing
//! begins.

use crate::constants::UK_DATE_FORMAT;
use crate::error::ExchangeError;
use encoding_rs::{Encoding, WINDOWS_1252};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Regional schema variant of a sales history export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    /// United Kingdom export: Windows-1252 bytes, day-first dates.
    #[default]
    UnitedKingdom,
}

impl Region {
    /// Legacy single-byte encoding the vendor writes this variant in.
    pub fn encoding(&self) -> &'static Encoding {
        match self {
            Region::UnitedKingdom => WINDOWS_1252,
        }
    }

    /// `chrono` format string for the variant's local date fields.
    pub fn date_format(&self) -> &'static str {
        match self {
            Region::UnitedKingdom => UK_DATE_FORMAT,
        }
    }
}

impl FromStr for Region {
    type Err = ExchangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uk" | "gb" | "united-kingdom" => Ok(Region::UnitedKingdom),
            other => Err(ExchangeError::Configuration {
                message: format!("unsupported region '{other}' (supported: uk)"),
            }),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::UnitedKingdom => write!(f, "uk"),
        }
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Regional schema variant to parse against.
    pub region: Region,
}

impl ParserConfig {
    pub fn new(region: Region) -> Self {
        Self { region }
    }
}
