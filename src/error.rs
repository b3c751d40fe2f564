//! Error handling for sales history parsing operations.
//!
//! Provides error types with context for file access, line normalization,
//! schema validation, row reconstruction, and field conversion failures.
//! There is no recovery policy: any structural anomaly aborts the parse and
//! partial results are never returned.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("illegal byte sequence for {encoding} on line {line}")]
    Encoding { encoding: &'static str, line: usize },

    #[error("required column '{column}' missing from header")]
    Schema { column: String },

    #[error("malformed trailer: {reason}")]
    Trailer { reason: String },

    #[error("record {record}: {reason}")]
    Row { record: usize, reason: String },

    #[error("field '{field}': {reason}")]
    FieldParse { field: String, reason: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, ExchangeError>;
