//! Data models for sales history records
//!
//! This module contains the core data structures for representing parsed
//! sales history exports: orders, the line items they own, and the typed
//! value objects (prices, sentiments, addresses) recovered from raw fields.
//! All entities are created fresh per parse and never mutated afterward.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Value Objects
// =============================================================================

/// Currency of a price field, recovered from its currency symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Gbp,
    Usd,
    Eur,
}

impl Currency {
    /// Three-letter ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Gbp => "GBP",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Map a currency symbol from the export to its currency.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "\u{a3}" => Some(Currency::Gbp),
            "$" => Some(Currency::Usd),
            "\u{20ac}" => Some(Currency::Eur),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary amount tagged with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub currency: Currency,
    pub amount: Decimal,
}

/// Sentiment of feedback the buyer left on a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackSentiment {
    Positive,
    Neutral,
    Negative,
}

impl FeedbackSentiment {
    /// Numeric score: +1 positive, 0 neutral, -1 negative.
    pub fn score(&self) -> i8 {
        match self {
            FeedbackSentiment::Positive => 1,
            FeedbackSentiment::Neutral => 0,
            FeedbackSentiment::Negative => -1,
        }
    }
}

/// Postal address block from the export. Every component is optional; the
/// vendor leaves unused lines blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub town_city: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// True when the export left every component blank.
    pub fn is_empty(&self) -> bool {
        self.address_1.is_none()
            && self.address_2.is_none()
            && self.town_city.is_none()
            && self.county.is_none()
            && self.postcode.is_none()
            && self.country.is_none()
    }
}

// =============================================================================
// Line Item Structure
// =============================================================================

/// One sold item within an order.
///
/// Owned exclusively by its parent [`Order`]; created during rationalization
/// and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Vendor listing number; always positive (it is what marks a row as
    /// carrying an item at all).
    pub item_number: u64,

    /// Seller's stock-keeping code.
    pub custom_label: Option<String>,

    /// Listing title.
    pub title: Option<String>,

    /// Variation description for multi-variation listings.
    pub variation_details: Option<String>,

    /// Units sold; at least 1.
    pub quantity: u64,

    /// Currency of the unit price.
    pub currency: Currency,

    /// Price per unit.
    pub unit_price: Decimal,

    /// Date of the sale.
    pub sale_date: Option<NaiveDate>,

    /// Whether the seller has left feedback for the buyer.
    pub feedback_left: bool,

    /// Sentiment of feedback received from the buyer, if any.
    pub feedback_received: Option<FeedbackSentiment>,

    /// Vendor transaction identifier.
    pub transaction_id: Option<u64>,

    /// Vendor order identifier.
    pub order_id: Option<u64>,
}

impl LineItem {
    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

// =============================================================================
// Order Structure
// =============================================================================

/// One buyer transaction, possibly covering multiple line items.
///
/// An order corresponds to the single row per group whose buyer-email field
/// is populated; that row carries all order-level fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique record key within the file.
    pub sales_record_number: u64,

    /// Buyer's vendor account name.
    pub buyer_user_id: Option<String>,

    /// Buyer's full name.
    pub buyer_full_name: Option<String>,

    /// Buyer's email address; non-empty by construction (it is what marks a
    /// row as an order header).
    pub buyer_email: String,

    /// Buyer's phone number.
    pub buyer_phone: Option<String>,

    /// Buyer's registered address.
    pub buyer_address: Address,

    /// Delivery address.
    pub post_to_address: Address,

    /// Currency of the order's monetary fields, taken from the total price.
    pub currency: Currency,

    /// Item subtotal before postage and fees.
    pub item_subtotal: Decimal,

    /// VAT-inclusive rate as a percentage.
    pub included_vat_rate: f64,

    /// Postage and packaging charge.
    pub postage_and_packaging: Option<Price>,

    /// Insurance charge.
    pub insurance: Option<Price>,

    /// Cash-on-delivery fee.
    pub cash_on_delivery_fee: Option<Price>,

    /// Total charged to the buyer.
    pub total_price: Decimal,

    /// Payment method name as exported.
    pub payment_method: Option<String>,

    pub sale_date: Option<NaiveDate>,
    pub checkout_date: Option<NaiveDate>,
    pub paid_on_date: Option<NaiveDate>,
    pub dispatch_date: Option<NaiveDate>,
    pub invoice_date: Option<NaiveDate>,

    /// Invoice number as exported.
    pub invoice_number: Option<String>,

    /// Seller's private free-text notes.
    pub notes_to_yourself: Option<String>,

    /// Payment processor transaction identifier.
    pub paypal_transaction_id: Option<String>,

    /// Delivery service name.
    pub delivery_service: Option<String>,

    /// Cash-on-delivery option as exported.
    pub cash_on_delivery_option: Option<String>,

    /// Vendor transaction identifier.
    pub transaction_id: Option<u64>,

    /// Vendor order identifier.
    pub order_id: Option<u64>,

    /// Whether the order shipped through the global shipping programme.
    pub global_shipping_programme: bool,

    /// Reference id for the global shipping programme consignment.
    pub global_shipping_reference_id: Option<String>,

    /// Whether the order used click and collect.
    pub click_and_collect: bool,

    /// Click and collect reference.
    pub click_and_collect_reference: Option<String>,

    /// Whether the sale was made under the eBay Plus programme.
    pub ebay_plus: bool,

    /// Items sold in this order, in original file order.
    pub line_items: Vec<LineItem>,
}

impl Order {
    /// Number of line items in the order.
    pub fn item_count(&self) -> usize {
        self.line_items.len()
    }

    /// Total units across all line items.
    pub fn total_quantity(&self) -> u64 {
        self.line_items.iter().map(|item| item.quantity).sum()
    }
}
