//! Row rationalization: grouping flat rows into orders
//!
//! The export writes each order's buyer and totals on the last row of its
//! group, while item fields repeat on every row of the group. Walking the
//! rows in reverse therefore meets an order header before its items: the
//! fold keeps one open order and attaches items to it until the previous
//! group's header appears, then starts the next. Per-order item lists and
//! the emitted order sequence are both reversed back to original file order
//! before the result is considered final.

use tracing::{debug, warn};

use super::field_parsers::{
    boolean, feedback_sentiment, loose_integer, optional_date, optional_price, optional_text,
    percentage, required_price,
};
use super::reconstructor::Row;
use super::stats::ParseStats;
use crate::app::models::{Address, LineItem, Order};
use crate::config::Region;
use crate::error::{ExchangeError, Result};

/// Group reconstructed rows into orders, restoring file order.
///
/// A row carrying a positive item number contributes a line item; a row
/// with a non-empty buyer email is an order header. A row may be both, or
/// neither (a malformed row contributes nothing besides its item, if any).
/// Items in a truncated trailing group with no header cannot be attached
/// anywhere; they are dropped, counted, and logged.
pub fn rationalize(rows: &[Row], region: Region, stats: &mut ParseStats) -> Result<Vec<Order>> {
    let mut orders: Vec<Order> = Vec::new();
    let mut current: Option<Order> = None;

    for (index, row) in rows.iter().enumerate().rev() {
        let record = index + 1;

        if !row.get("buyer_email").trim().is_empty() {
            if let Some(order) = current.take() {
                orders.push(finalize(order));
            }
            current = Some(order_from_row(row, region, record)?);
        }

        if let Some(item_number) = positive_item_number(row) {
            let item = line_item_from_row(row, item_number, region)?;
            match current.as_mut() {
                Some(order) => order.line_items.push(item),
                None => {
                    stats.orphaned_items += 1;
                    warn!(
                        "record {record}: dropping item {item_number} with no following order header"
                    );
                }
            }
        }
    }

    if let Some(order) = current.take() {
        orders.push(finalize(order));
    }
    orders.reverse();

    debug!("rationalized {} rows into {} orders", rows.len(), orders.len());
    Ok(orders)
}

/// Items were collected walking backwards; restore original file order.
fn finalize(mut order: Order) -> Order {
    order.line_items.reverse();
    order
}

fn positive_item_number(row: &Row) -> Option<u64> {
    loose_integer(row.get("item_number")).filter(|&n| n > 0)
}

fn order_from_row(row: &Row, region: Region, record: usize) -> Result<Order> {
    let format = region.date_format();

    let sales_record_number =
        loose_integer(row.get("sales_record_number")).ok_or_else(|| ExchangeError::FieldParse {
            field: "sales_record_number".to_string(),
            reason: format!("record {record}: order header has no sales record number"),
        })?;
    let subtotal = required_price(row.get("sale_price"), "sale_price")?;
    let total = required_price(row.get("total_price"), "total_price")?;

    Ok(Order {
        sales_record_number,
        buyer_user_id: optional_text(row.get("user_id")),
        buyer_full_name: optional_text(row.get("buyer_full_name")),
        buyer_email: row.get("buyer_email").trim().to_string(),
        buyer_phone: optional_text(row.get("buyer_phone_number")),
        buyer_address: buyer_address(row),
        post_to_address: post_to_address(row),
        currency: total.currency,
        item_subtotal: subtotal.amount,
        included_vat_rate: percentage(row.get("included_vat_rate")),
        postage_and_packaging: optional_price(row.get("postage_and_packaging")),
        insurance: optional_price(row.get("insurance")),
        cash_on_delivery_fee: optional_price(row.get("cash_on_delivery_fee")),
        total_price: total.amount,
        payment_method: optional_text(row.get("payment_method")),
        sale_date: optional_date(row.get("sale_date"), format, "sale_date")?,
        checkout_date: optional_date(row.get("checkout_date"), format, "checkout_date")?,
        paid_on_date: optional_date(row.get("paid_on_date"), format, "paid_on_date")?,
        dispatch_date: optional_date(row.get("dispatch_date"), format, "dispatch_date")?,
        invoice_date: optional_date(row.get("invoice_date"), format, "invoice_date")?,
        invoice_number: optional_text(row.get("invoice_number")),
        notes_to_yourself: optional_text(row.get("notes_to_yourself")),
        paypal_transaction_id: optional_text(row.get("paypal_transaction_id")),
        delivery_service: optional_text(row.get("delivery_service")),
        cash_on_delivery_option: optional_text(row.get("cash_on_delivery_option")),
        transaction_id: loose_integer(row.get("transaction_id")),
        order_id: loose_integer(row.get("order_id")),
        global_shipping_programme: boolean(row.get("global_shipping_programme")),
        global_shipping_reference_id: optional_text(row.get("global_shipping_reference_id")),
        click_and_collect: boolean(row.get("click_and_collect")),
        click_and_collect_reference: optional_text(row.get("click_and_collect_reference")),
        ebay_plus: boolean(row.get("ebay_plus")),
        line_items: Vec::new(),
    })
}

fn line_item_from_row(row: &Row, item_number: u64, region: Region) -> Result<LineItem> {
    let price = required_price(row.get("sale_price"), "sale_price")?;

    Ok(LineItem {
        item_number,
        custom_label: optional_text(row.get("custom_label")),
        title: optional_text(row.get("item_title")),
        variation_details: optional_text(row.get("variation_details")),
        quantity: loose_integer(row.get("quantity")).unwrap_or(1).max(1),
        currency: price.currency,
        unit_price: price.amount,
        sale_date: optional_date(row.get("sale_date"), region.date_format(), "sale_date")?,
        feedback_left: boolean(row.get("feedback_left")),
        feedback_received: feedback_sentiment(row.get("feedback_received")),
        transaction_id: loose_integer(row.get("transaction_id")),
        order_id: loose_integer(row.get("order_id")),
    })
}

fn buyer_address(row: &Row) -> Address {
    Address {
        address_1: optional_text(row.get("buyer_address_1")),
        address_2: optional_text(row.get("buyer_address_2")),
        town_city: optional_text(row.get("buyer_town_city")),
        county: optional_text(row.get("buyer_county")),
        postcode: optional_text(row.get("buyer_postcode")),
        country: optional_text(row.get("buyer_country")),
    }
}

fn post_to_address(row: &Row) -> Address {
    Address {
        address_1: optional_text(row.get("post_to_address_1")),
        address_2: optional_text(row.get("post_to_address_2")),
        town_city: optional_text(row.get("post_to_city")),
        county: optional_text(row.get("post_to_county")),
        postcode: optional_text(row.get("post_to_postcode")),
        country: optional_text(row.get("post_to_country")),
    }
}
