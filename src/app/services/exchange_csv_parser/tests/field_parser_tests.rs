//! Tests for typed field parsers

use rust_decimal::Decimal;

use crate::app::models::{Currency, FeedbackSentiment};
use crate::app::services::exchange_csv_parser::field_parsers::{
    boolean, feedback_sentiment, loose_integer, optional_date, optional_price, optional_text,
    percentage, required_price,
};
use crate::error::ExchangeError;

fn decimal(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn test_optional_text() {
    assert_eq!(optional_text(""), None);
    assert_eq!(optional_text("   "), None);
    assert_eq!(optional_text("hello"), Some("hello".to_string()));
    // Embedded newlines from multi-line fields survive verbatim
    assert_eq!(optional_text("a\nb"), Some("a\nb".to_string()));
}

#[test]
fn test_loose_integer() {
    assert_eq!(loose_integer(""), None);
    assert_eq!(loose_integer("no digits"), None);
    assert_eq!(loose_integer("555"), Some(555));
    assert_eq!(loose_integer("100-200300"), Some(100_200_300));
    assert_eq!(loose_integer(" 42 "), Some(42));
}

#[test]
fn test_optional_date() {
    let format = "%d/%m/%Y";
    assert_eq!(optional_date("", format, "sale_date").unwrap(), None);
    assert_eq!(
        optional_date("26/08/2013", format, "sale_date").unwrap(),
        chrono::NaiveDate::from_ymd_opt(2013, 8, 26)
    );

    let error = optional_date("not a date", format, "sale_date").unwrap_err();
    assert!(matches!(error, ExchangeError::FieldParse { .. }));
    // Wrong regional format is malformed, not silently reinterpreted
    assert!(optional_date("2013-08-26", format, "sale_date").is_err());
}

#[test]
fn test_optional_price() {
    let price = optional_price("\u{a3}12.34").unwrap();
    assert_eq!(price.currency, Currency::Gbp);
    assert_eq!(price.amount, decimal("12.34"));

    let price = optional_price("$0.99").unwrap();
    assert_eq!(price.currency, Currency::Usd);
    assert_eq!(price.amount, decimal("0.99"));

    let price = optional_price("\u{20ac}5.00").unwrap();
    assert_eq!(price.currency, Currency::Eur);

    assert!(optional_price("").is_none());
    assert!(optional_price("12.34").is_none());
    // Exactly two fractional digits required
    assert!(optional_price("\u{a3}12.3").is_none());
    assert!(optional_price("\u{a3}12.345").is_none());
}

#[test]
fn test_required_price() {
    assert!(required_price("\u{a3}12.34", "total_price").is_ok());

    let error = required_price("", "total_price").unwrap_err();
    match error {
        ExchangeError::FieldParse { field, .. } => assert_eq!(field, "total_price"),
        other => panic!("expected FieldParse error, got {other:?}"),
    }
}

#[test]
fn test_percentage() {
    assert_eq!(percentage(""), 0.0);
    assert_eq!(percentage("20%"), 20.0);
    assert_eq!(percentage("17.5%"), 17.5);
    assert_eq!(percentage("20"), 20.0);
    assert_eq!(percentage("garbage"), 0.0);
}

#[test]
fn test_boolean() {
    assert!(boolean("1"));
    assert!(boolean("true"));
    assert!(boolean("TRUE"));
    assert!(boolean("Yes"));
    assert!(boolean(" yes "));

    assert!(!boolean(""));
    assert!(!boolean("No"));
    assert!(!boolean("0"));
    assert!(!boolean("anything else"));
}

#[test]
fn test_feedback_sentiment() {
    assert_eq!(feedback_sentiment("Positive"), Some(FeedbackSentiment::Positive));
    assert_eq!(
        feedback_sentiment("left POSITIVE feedback"),
        Some(FeedbackSentiment::Positive)
    );
    assert_eq!(feedback_sentiment("Negative"), Some(FeedbackSentiment::Negative));
    assert_eq!(feedback_sentiment("neutral"), Some(FeedbackSentiment::Neutral));
    assert_eq!(feedback_sentiment(""), None);
    assert_eq!(feedback_sentiment("unknown"), None);
}
