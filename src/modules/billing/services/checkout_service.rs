use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::billing::models::Bill;
use crate::modules::billing::repositories::{BillRepository, CartRepository};
use crate::modules::customers::repositories::CustomerRepository;

/// Request payload for finalizing a cart into a bill
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub customer_id: String,
    /// Accepted as-is; defaults to "Cash" when omitted
    pub payment_method: Option<String>,
}

/// Service that finalizes carts into bills
///
/// Checkout reads the cart totals and appends to bill history; both happen
/// under the shared session lock so a concurrent cart mutation cannot
/// interleave with the finalization.
pub struct CheckoutService {
    carts: Arc<dyn CartRepository>,
    bills: Arc<dyn BillRepository>,
    customers: Arc<dyn CustomerRepository>,
    session_lock: Arc<Mutex<()>>,
    tax_rate: Decimal,
}

impl CheckoutService {
    pub fn new(
        carts: Arc<dyn CartRepository>,
        bills: Arc<dyn BillRepository>,
        customers: Arc<dyn CustomerRepository>,
        session_lock: Arc<Mutex<()>>,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            carts,
            bills,
            customers,
            session_lock,
            tax_rate,
        }
    }

    /// Finalize a cart into an immutable bill
    ///
    /// Preconditions: the cart must have at least one line (`EmptyCart`) and
    /// the customer must exist (`NoCustomer`). On failure nothing changes;
    /// on success the bill is appended to history and the cart session is
    /// destroyed.
    pub async fn checkout(&self, cart_id: &Uuid, request: CheckoutRequest) -> Result<Bill> {
        let _guard = self.session_lock.lock().await;

        let cart = self
            .carts
            .get(cart_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Cart {}", cart_id)))?;

        if cart.is_empty() {
            return Err(AppError::EmptyCart);
        }

        let customer = self
            .customers
            .find_by_id(&request.customer_id)
            .await?
            .ok_or_else(|| AppError::NoCustomer(request.customer_id.clone()))?;

        let payment_method = request
            .payment_method
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Cash".to_string());

        let totals = cart.totals(self.tax_rate);
        let bill = Bill::from_cart(
            &cart,
            &totals,
            customer.id.clone(),
            customer.name.clone(),
            payment_method,
            self.tax_rate,
            Utc::now().date_naive(),
        );

        let bill = self.bills.append(bill).await?;
        self.carts.delete(cart_id).await?;

        info!(
            bill_id = %bill.id,
            customer = %bill.customer_name,
            total = %bill.total,
            "Checkout complete"
        );

        Ok(bill)
    }

    /// All bills in append order
    pub async fn list_bills(&self) -> Result<Vec<Bill>> {
        self.bills.list().await
    }

    /// Single bill by ID, or `NotFound`
    pub async fn get_bill(&self, id: &str) -> Result<Bill> {
        self.bills
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Bill {}", id)))
    }
}
