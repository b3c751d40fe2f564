//! Tests for logical-row reconstruction

use super::{quoted_row, test_schema};
use crate::app::services::exchange_csv_parser::reconstructor::reconstruct;
use crate::error::ExchangeError;

fn lines(strings: &[String]) -> Vec<String> {
    strings.to_vec()
}

#[test]
fn test_single_line_rows() {
    let schema = test_schema();
    let rows = reconstruct(
        &lines(&[
            quoted_row(&[("sales_record_number", "1"), ("item_title", "Widget")]),
            quoted_row(&[("sales_record_number", "2"), ("item_title", "Gadget")]),
        ]),
        &schema,
    )
    .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("sales_record_number"), "1");
    assert_eq!(rows[0].get("item_title"), "Widget");
    assert_eq!(rows[1].get("item_title"), "Gadget");
}

#[test]
fn test_outermost_quotes_are_stripped() {
    let schema = test_schema();
    let rows = reconstruct(
        &lines(&[quoted_row(&[
            ("sales_record_number", "1"),
            ("ebay_plus", "yes"),
        ])]),
        &schema,
    )
    .unwrap();

    // First and last schema columns carry the row's outermost quotes in the
    // raw text; both must be gone
    assert_eq!(rows[0].get("sales_record_number"), "1");
    assert_eq!(rows[0].get("ebay_plus"), "yes");
}

#[test]
fn test_multiline_field_spans_three_lines() {
    let schema = test_schema();
    let note = "first line\nsecond line\nthird line";
    let logical = quoted_row(&[
        ("sales_record_number", "1"),
        ("notes_to_yourself", note),
    ]);
    let physical: Vec<String> = logical.split('\n').map(str::to_string).collect();
    assert_eq!(physical.len(), 3);

    let rows = reconstruct(&physical, &schema).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("notes_to_yourself"), note);
}

#[test]
fn test_multiline_followed_by_plain_row() {
    let schema = test_schema();
    let logical = quoted_row(&[("notes_to_yourself", "a\nb")]);
    let mut physical: Vec<String> = logical.split('\n').map(str::to_string).collect();
    physical.push(quoted_row(&[("item_title", "Widget")]));

    let rows = reconstruct(&physical, &schema).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("notes_to_yourself"), "a\nb");
    assert_eq!(rows[1].get("item_title"), "Widget");
}

#[test]
fn test_too_many_fields_is_an_error() {
    let schema = test_schema();
    let oversized = format!("{},\"extra\"", quoted_row(&[]));

    let error = reconstruct(&lines(&[quoted_row(&[]), oversized]), &schema).unwrap_err();
    match error {
        ExchangeError::Row { record, .. } => assert_eq!(record, 2),
        other => panic!("expected Row error, got {other:?}"),
    }
}

#[test]
fn test_incomplete_final_record_is_an_error() {
    let schema = test_schema();
    // A lone opening fragment never reaches the schema's field count
    let error = reconstruct(&lines(&["\"1\",\"only a few\",\"fields\"".to_string()]), &schema)
        .unwrap_err();
    match error {
        ExchangeError::Row { record, reason } => {
            assert_eq!(record, 1);
            assert!(reason.contains("incomplete"));
        }
        other => panic!("expected Row error, got {other:?}"),
    }
}

#[test]
fn test_empty_region_yields_no_rows() {
    let schema = test_schema();
    let rows = reconstruct(&[], &schema).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_repaired_empty_fields_align() {
    let schema = test_schema();
    // A row whose empty fields were left unquoted by the vendor, after the
    // normalizer's repair pass
    let raw = quoted_row(&[("sales_record_number", "7"), ("buyer_country", "United Kingdom")]);
    let unquoted_empties = raw.replace("\"\"", "");
    let repaired = crate::app::services::exchange_csv_parser::normalizer::repair_empty_fields(
        &unquoted_empties,
    );

    let rows = reconstruct(&lines(&[repaired]), &schema).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("sales_record_number"), "7");
    assert_eq!(rows[0].get("buyer_country"), "United Kingdom");
    assert_eq!(rows[0].get("buyer_email"), "");
}
