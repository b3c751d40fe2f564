//! Application constants for the sales history parser
//!
//! This module contains the required column set, regional format constants,
//! and value tables used throughout the parser.

// =============================================================================
// Required Schema Columns
// =============================================================================

/// Normalized column identifiers every export header must contain.
///
/// Order on the header line is flexible; the positions actually found there
/// are what map fields onto columns downstream.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "sales_record_number",
    "user_id",
    "buyer_full_name",
    "buyer_phone_number",
    "buyer_email",
    "buyer_address_1",
    "buyer_address_2",
    "buyer_town_city",
    "buyer_county",
    "buyer_postcode",
    "buyer_country",
    "item_number",
    "item_title",
    "custom_label",
    "quantity",
    "sale_price",
    "included_vat_rate",
    "postage_and_packaging",
    "insurance",
    "cash_on_delivery_fee",
    "total_price",
    "payment_method",
    "sale_date",
    "checkout_date",
    "paid_on_date",
    "dispatch_date",
    "invoice_date",
    "invoice_number",
    "feedback_left",
    "feedback_received",
    "notes_to_yourself",
    "paypal_transaction_id",
    "delivery_service",
    "cash_on_delivery_option",
    "transaction_id",
    "order_id",
    "variation_details",
    "global_shipping_programme",
    "global_shipping_reference_id",
    "click_and_collect",
    "click_and_collect_reference",
    "post_to_address_1",
    "post_to_address_2",
    "post_to_city",
    "post_to_county",
    "post_to_postcode",
    "post_to_country",
    "ebay_plus",
];

// =============================================================================
// Regional Format Constants
// =============================================================================

/// Day-first date format used by the United Kingdom export variant.
pub const UK_DATE_FORMAT: &str = "%d/%m/%Y";

// =============================================================================
// Field Value Tables
// =============================================================================

/// Trimmed, lowercased values the export uses for a true boolean flag.
/// Everything else, including blank, reads as false.
pub const TRUE_VALUES: &[&str] = &["1", "true", "yes"];
