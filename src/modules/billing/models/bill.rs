// A bill is the immutable record of a completed sale. Bills are appended to
// the history collection at checkout and never edited in place; invoices are
// derived views over a bill, not stored separately.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::billing::models::cart::{Cart, CartTotals};

/// Bill status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Paid,
    Pending,
    Cancelled,
}

impl std::fmt::Display for BillStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillStatus::Paid => write!(f, "paid"),
            BillStatus::Pending => write!(f, "pending"),
            BillStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for BillStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "paid" => Ok(BillStatus::Paid),
            "pending" => Ok(BillStatus::Pending),
            "cancelled" => Ok(BillStatus::Cancelled),
            _ => Err(format!("Invalid bill status: {}", s)),
        }
    }
}

/// A finalized bill line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price captured at add time
    pub price: Decimal,
    /// Per-line discount; no per-line discount policy exists at checkout,
    /// so live bills carry 0 (seeded history may differ)
    pub discount: Decimal,
    /// price × quantity × tax rate
    pub tax: Decimal,
    /// quantity × price
    pub total: Decimal,
}

/// An immutable, finalized record of a completed sale
///
/// Invariants: `total = subtotal + tax - discount`, and the item totals sum
/// to `subtotal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Sequential ID in the form `B001`, `B002`, … assigned by the history
    /// store; the numeric portion widens past 999 rather than truncating
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub items: Vec<BillItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    /// Issue date (ISO `yyyy-MM-dd`)
    pub date: NaiveDate,
    /// Caller-supplied payment method, accepted as-is (not validated against
    /// a closed set)
    pub payment_method: String,
    pub status: BillStatus,
}

impl Bill {
    /// Build a bill from a finalized cart. The ID is assigned when the bill
    /// is appended to the history store.
    pub fn from_cart(
        cart: &Cart,
        totals: &CartTotals,
        customer_id: String,
        customer_name: String,
        payment_method: String,
        tax_rate: Decimal,
        date: NaiveDate,
    ) -> Self {
        let items = cart
            .lines
            .iter()
            .map(|line| BillItem {
                product_id: line.product_id.clone(),
                product_name: line.product_name.clone(),
                quantity: line.quantity,
                price: line.unit_price,
                discount: Decimal::ZERO,
                tax: line.unit_price * Decimal::from(line.quantity) * tax_rate,
                total: line.line_total,
            })
            .collect();

        Self {
            id: String::new(),
            customer_id,
            customer_name,
            items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            discount: Decimal::ZERO,
            total: totals.total,
            date,
            payment_method,
            status: BillStatus::Paid,
        }
    }
}
