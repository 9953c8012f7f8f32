// A product is a read-mostly catalog record seeded at process start.
// Cart operations read catalog stock but never decrement it; stock is only
// consulted to gate adds and to derive replenishment alerts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A pharmacy catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID
    pub id: String,

    /// Display name, e.g. "Amoxicillin 500mg"
    pub name: String,

    /// Therapeutic category, also the key for alternative-product lookup
    pub category: String,

    /// Short description of the product
    pub description: String,

    /// Manufacturer batch number
    pub batch_no: String,

    /// Calendar expiry date
    pub expiry_date: NaiveDate,

    /// Units currently on hand
    pub stock: u32,

    /// Unit price in US dollars
    pub price: Decimal,

    /// Manufacturer name
    pub manufacturer: String,

    /// Physical shelf location
    pub location: String,

    /// Stock threshold at or below which the product is flagged for reorder
    pub reorder_level: u32,
}

impl Product {
    /// A product with no units on hand is out of stock regardless of its
    /// reorder level.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Days from `today` until this product expires; negative when already
    /// expired.
    pub fn days_to_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }
}
