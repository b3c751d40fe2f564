//! Test utilities and fixtures for exchange CSV parser testing
//!
//! This module provides helper functions for building export fixtures used
//! across the component test modules.

use crate::constants::REQUIRED_COLUMNS;

use super::schema::Schema;

// Test modules
mod field_parser_tests;
mod reconstructor_tests;

/// The vendor's free-text header line, with columns in the canonical order
/// of [`REQUIRED_COLUMNS`].
pub fn vendor_header() -> String {
    "Sales Record Number,User Id,Buyer Full Name,Buyer Phone Number,Buyer Email,\
     Buyer Address 1,Buyer Address 2,Buyer Town/City,Buyer County,Buyer Postcode,\
     Buyer Country,Item Number,Item Title,Custom Label,Quantity,Sale Price,\
     Included VAT Rate,Postage and Packaging,Insurance,Cash on Delivery Fee,\
     Total Price,Payment Method,Sale Date,Checkout Date,Paid on Date,\
     Dispatch Date,Invoice Date,Invoice Number,Feedback Left,Feedback Received,\
     Notes to Yourself,PayPal Transaction ID,Delivery Service,\
     Cash On Delivery Option,Transaction ID,Order ID,Variation Details,\
     Global Shipping Programme,Global Shipping Reference ID,Click and Collect,\
     Click and Collect Reference,Post To Address 1,Post To Address 2,\
     Post To City,Post To County,Post To Postcode,Post To Country,eBay Plus"
        .to_string()
}

/// Schema built from [`vendor_header`].
pub fn test_schema() -> Schema {
    Schema::parse(&vendor_header()).expect("vendor header must validate")
}

/// Build a fully-quoted data line with every required column, overriding
/// the named columns and leaving the rest empty.
pub fn quoted_row(overrides: &[(&str, &str)]) -> String {
    for (column, _) in overrides {
        assert!(
            REQUIRED_COLUMNS.contains(column),
            "unknown column in test fixture: {column}"
        );
    }
    REQUIRED_COLUMNS
        .iter()
        .map(|column| {
            let value = overrides
                .iter()
                .find(|(c, _)| c == column)
                .map(|(_, v)| *v)
                .unwrap_or("");
            format!("\"{value}\"")
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// A minimal order-header row that also carries one line item.
pub fn header_row(record: &str, email: &str, item: &str) -> String {
    quoted_row(&[
        ("sales_record_number", record),
        ("buyer_email", email),
        ("item_number", item),
        ("quantity", "1"),
        ("sale_price", "\u{a3}5.00"),
        ("total_price", "\u{a3}5.00"),
    ])
}

/// An item-only row with no order-level fields.
pub fn item_row(item: &str) -> String {
    quoted_row(&[
        ("item_number", item),
        ("quantity", "1"),
        ("sale_price", "\u{a3}5.00"),
    ])
}
