//! Typed field parsers for rationalized rows
//!
//! Parsers are total over blank input: a blank field yields an absent value
//! or the documented default instead of an error. The exceptions are
//! malformed non-blank dates and the prices a record cannot do without
//! (total price, sale price), which fail rather than silently defaulting.

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;

use crate::app::models::{Currency, FeedbackSentiment, Price};
use crate::constants::TRUE_VALUES;
use crate::error::{ExchangeError, Result};

// A currency symbol immediately followed by an amount with exactly two
// fractional digits, e.g. "\u{a3}12.34".
static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\u{a3}|\$|\u{20ac})(\d+\.\d{2})$").unwrap());
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)").unwrap());

/// Non-blank text, verbatim (embedded newlines survive).
pub fn optional_text(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Loose base-10 integer coercion: non-digit characters are ignored, so
/// formatted record keys like `100-200300` coerce to `100200300`.
/// Blank or digit-free input is absent.
pub fn loose_integer(value: &str) -> Option<u64> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Regional local date. Blank is absent; a malformed non-blank date is an
/// error because silently dropping a present date would corrupt the record.
pub fn optional_date(value: &str, format: &str, field: &str) -> Result<Option<NaiveDate>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, format)
        .map(Some)
        .map_err(|e| ExchangeError::FieldParse {
            field: field.to_string(),
            reason: format!("invalid date {trimmed:?}: {e}"),
        })
}

/// Currency-tagged price: `\u{a3}12.34` -> GBP 12.34. Blank or unmatched
/// input is an empty price, never an error.
pub fn optional_price(value: &str) -> Option<Price> {
    let captures = PRICE.captures(value.trim())?;
    let currency = Currency::from_symbol(&captures[1])?;
    let amount = captures[2].parse::<Decimal>().ok()?;
    Some(Price { currency, amount })
}

/// Price the record cannot do without (total price, sale price).
pub fn required_price(value: &str, field: &str) -> Result<Price> {
    optional_price(value).ok_or_else(|| ExchangeError::FieldParse {
        field: field.to_string(),
        reason: format!("expected a currency-tagged amount, found {:?}", value.trim()),
    })
}

/// Leading decimal number with an optional trailing `%`. Blank is 0.0.
pub fn percentage(value: &str) -> f64 {
    LEADING_NUMBER
        .captures(value.trim())
        .and_then(|captures| captures[1].parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// True iff the trimmed, lowercased value is one of `1`, `true`, `yes`.
pub fn boolean(value: &str) -> bool {
    TRUE_VALUES.contains(&value.trim().to_lowercase().as_str())
}

/// Case-insensitive sentiment match; anything unrecognized is absent.
pub fn feedback_sentiment(value: &str) -> Option<FeedbackSentiment> {
    let lowered = value.to_lowercase();
    if lowered.contains("positive") {
        Some(FeedbackSentiment::Positive)
    } else if lowered.contains("negative") {
        Some(FeedbackSentiment::Negative)
    } else if lowered.contains("neutral") {
        Some(FeedbackSentiment::Neutral)
    } else {
        None
    }
}
