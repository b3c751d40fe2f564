//! Parsing statistics and result structures for sales history processing
//!
//! This module provides types for organizing parsed results and tracking
//! what the parse recovered from the file.

use serde::{Deserialize, Serialize};

use crate::app::models::Order;

/// Complete parse output: orders plus trailer metadata and statistics.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Orders in original file order, each owning its line items.
    pub orders: Vec<Order>,

    /// Record count declared by the file trailer.
    pub record_count: usize,

    /// Seller identifier declared by the file trailer.
    pub seller_id: String,

    /// Parsing statistics.
    pub stats: ParseStats,
}

/// Simple parsing statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseStats {
    /// Non-blank physical lines after normalization.
    pub physical_lines: usize,

    /// Logical rows reconstructed from the data section.
    pub logical_rows: usize,

    /// Orders emitted by rationalization.
    pub orders_parsed: usize,

    /// Line items attached to orders.
    pub items_parsed: usize,

    /// Line items dropped because no order header followed them.
    pub orphaned_items: usize,
}

impl ParseStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Average line items per order.
    pub fn items_per_order(&self) -> f64 {
        if self.orders_parsed == 0 {
            0.0
        } else {
            self.items_parsed as f64 / self.orders_parsed as f64
        }
    }
}
