//! Logical-row reconstruction from physical lines
//!
//! A quoted field may contain embedded line breaks, so one logical record
//! can span several physical lines. Lines are accumulated until the field
//! count reaches the schema's column count, then the accumulated text is
//! split on the vendor's quote-delimited separator and zipped onto the
//! schema positionally.

use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::schema::Schema;
use crate::error::{ExchangeError, Result};

// Separator between two quote-delimited fields. This only matches between
// fields, never inside one: field text never contains a quote immediately
// adjacent to a comma and another quote.
static FIELD_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""\s*,\s*""#).unwrap());

/// One logical record: column identifier mapped to raw field text.
///
/// The key set equals the schema exactly. Produced by [`reconstruct`],
/// consumed and discarded by the rationalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    /// Split an accumulated logical line into fields and map them onto the
    /// schema. The split pattern consumes interior quote/comma/quote runs
    /// but leaves the row's outermost quotes behind as artifacts, so one
    /// leading and one trailing quote are stripped here.
    fn from_logical_line(schema: &Schema, line: &str) -> Self {
        let mut values: Vec<String> = FIELD_SEPARATOR.split(line).map(str::to_string).collect();

        if let Some(first) = values.first_mut() {
            if first.starts_with('"') {
                first.remove(0);
            }
        }
        if let Some(last) = values.last_mut() {
            if last.ends_with('"') {
                last.pop();
            }
        }

        let fields = schema.columns().iter().cloned().zip(values).collect();
        Self { fields }
    }

    /// Raw text of a column. Returns the empty string for a column outside
    /// the schema, which typed parsers treat as blank.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Merge physical lines into logical rows and map fields onto the schema.
///
/// The accumulator is retained across lines while the field count is still
/// below the column count; that is how a record with embedded line breaks
/// is recovered. A field count above the column count is a hard error, as
/// is an accumulator left non-empty once the row region is exhausted.
pub fn reconstruct(lines: &[String], schema: &Schema) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    let mut accumulator = String::new();

    for line in lines {
        if !accumulator.is_empty() {
            accumulator.push('\n');
        }
        accumulator.push_str(line);

        let field_count = FIELD_SEPARATOR.split(&accumulator).count();
        match field_count.cmp(&schema.len()) {
            Ordering::Greater => {
                return Err(ExchangeError::Row {
                    record: rows.len() + 1,
                    reason: format!(
                        "{field_count} fields found where the schema has {}",
                        schema.len()
                    ),
                });
            }
            Ordering::Equal => {
                rows.push(Row::from_logical_line(schema, accumulator.trim()));
                accumulator.clear();
            }
            // An embedded line break: keep accumulating
            Ordering::Less => {}
        }
    }

    if !accumulator.is_empty() {
        return Err(ExchangeError::Row {
            record: rows.len() + 1,
            reason: "incomplete record at end of data section".to_string(),
        });
    }

    Ok(rows)
}
