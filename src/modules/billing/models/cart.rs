// Cart accumulator. A cart is a session-scoped line-item list assembled from
// catalog selections. Mutations are all-or-nothing: a failed operation leaves
// the cart exactly as it was. Adding to a cart never reserves or decrements
// catalog stock; stock is only read to gate the add.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::catalog::models::Product;

/// A single cart line
///
/// At most one line exists per product ID; re-adding a product increments
/// its quantity instead of appending a duplicate. The unit price is captured
/// at add time and does not track later catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    /// quantity × unit_price, kept in sync by every mutation
    pub line_total: Decimal,
}

impl CartLine {
    fn recompute_total(&mut self) {
        self.line_total = Decimal::from(self.quantity) * self.unit_price;
    }
}

/// Aggregate cart totals, unrounded
///
/// Rounding to display precision happens only at presentation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// A billing-session cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: Uuid,
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            lines: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a product.
    ///
    /// Fails with `OutOfStock` when the product has no units on hand; the
    /// caller is expected to offer same-category alternatives instead.
    pub fn add_product(&mut self, product: &Product) -> Result<()> {
        if product.is_out_of_stock() {
            return Err(AppError::out_of_stock(product.name.clone()));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line
                .quantity
                .checked_add(1)
                .ok_or(AppError::InvalidQuantity(i64::from(u32::MAX) + 1))?;
            line.recompute_total();
        } else {
            self.lines.push(CartLine {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                quantity: 1,
                unit_price: product.price,
                line_total: product.price,
            });
        }

        Ok(())
    }

    /// Remove the line for a product; no-op when absent.
    pub fn remove_line(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Set the quantity of an existing line.
    ///
    /// Fails with `InvalidQuantity` for quantities below 1 (use `remove_line`
    /// for zero) or above `u32::MAX`. No-op when the line is absent.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> Result<()> {
        if quantity < 1 {
            return Err(AppError::InvalidQuantity(quantity));
        }
        let quantity = u32::try_from(quantity).map_err(|_| AppError::InvalidQuantity(quantity))?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
            line.recompute_total();
        }

        Ok(())
    }

    /// Subtotal, tax, and total at the given flat tax rate, unrounded.
    pub fn totals(&self, tax_rate: Decimal) -> CartTotals {
        let subtotal: Decimal = self.lines.iter().map(|l| l.line_total).sum();
        let tax = subtotal * tax_rate;

        CartTotals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
