//! Line normalization for sales history exports
//!
//! Decodes the vendor's legacy single-byte bytes to UTF-8, drops blank
//! lines, and repairs unquoted empty fields. The repair step is what lets
//! the downstream splitter assume every field is quote-delimited; without it
//! trailing and embedded empty fields silently misalign column positions.

use crate::config::Region;
use crate::error::{ExchangeError, Result};

/// Code points the strict Windows-1252 codepage leaves unassigned.
/// encoding_rs follows the WHATWG mapping, which decodes them to C1
/// controls instead of reporting an error, so they are rejected up front.
const UNASSIGNED_BYTES: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Decode raw export bytes into normalized text lines.
///
/// Lines are decoded one at a time so an encoding failure can name the
/// offending physical line. Blank lines are dropped entirely.
pub fn normalize(bytes: &[u8], region: Region) -> Result<Vec<String>> {
    let encoding = region.encoding();
    let mut lines = Vec::new();

    for (index, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

        if raw.iter().any(|b| UNASSIGNED_BYTES.contains(b)) {
            return Err(ExchangeError::Encoding {
                encoding: encoding.name(),
                line: index + 1,
            });
        }
        let (decoded, had_errors) = encoding.decode_without_bom_handling(raw);
        if had_errors {
            return Err(ExchangeError::Encoding {
                encoding: encoding.name(),
                line: index + 1,
            });
        }

        let trimmed = decoded.trim();
        if trimmed.is_empty() {
            continue;
        }
        lines.push(repair_empty_fields(trimmed));
    }

    Ok(lines)
}

/// Rewrite unquoted empty fields as explicit empty-quoted fields.
///
/// Two consecutive separators become a separator, an empty quoted field,
/// and a separator (`,,` -> `,"",`); a trailing bare separator gains a
/// final `""` so every physical line ends inside a quoted field.
/// Idempotent: a repaired line passes through unchanged.
pub fn repair_empty_fields(line: &str) -> String {
    let mut repaired = line.to_string();
    // replace() skips overlapping runs, so loop until none remain
    while repaired.contains(",,") {
        repaired = repaired.replace(",,", ",\"\",");
    }
    if repaired.ends_with(',') {
        repaired.push_str("\"\"");
    }
    repaired
}
