use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::billing::models::{Cart, CartLine, CartTotals};
use crate::modules::billing::repositories::CartRepository;
use crate::modules::catalog::repositories::CatalogRepository;

/// A cart together with its running totals, as returned to callers after
/// every mutation
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub id: Uuid,
    pub lines: Vec<CartLine>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl CartView {
    pub fn new(cart: Cart, totals: CartTotals) -> Self {
        Self {
            id: cart.id,
            lines: cart.lines,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
        }
    }
}

/// Service for cart session operations
///
/// Each operation runs read-mutate-save under the shared session lock, so a
/// cart mutation is atomic with respect to other mutations and to checkout.
pub struct CartService {
    carts: Arc<dyn CartRepository>,
    catalog: Arc<dyn CatalogRepository>,
    session_lock: Arc<Mutex<()>>,
    tax_rate: Decimal,
}

impl CartService {
    pub fn new(
        carts: Arc<dyn CartRepository>,
        catalog: Arc<dyn CatalogRepository>,
        session_lock: Arc<Mutex<()>>,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            carts,
            catalog,
            session_lock,
            tax_rate,
        }
    }

    /// Open a new empty cart session
    pub async fn create_cart(&self) -> Result<CartView> {
        let cart = self.carts.create().await?;
        debug!(cart_id = %cart.id, "Cart session opened");
        Ok(self.view(cart))
    }

    /// Current cart state with running totals
    pub async fn get_cart(&self, cart_id: &Uuid) -> Result<CartView> {
        let cart = self.load(cart_id).await?;
        Ok(self.view(cart))
    }

    /// Add one unit of a product to the cart
    ///
    /// Fails with `OutOfStock` for a zero-stock product, leaving the cart
    /// untouched; the caller should fall back to the alternatives lookup.
    pub async fn add_item(&self, cart_id: &Uuid, product_id: &str) -> Result<CartView> {
        let _guard = self.session_lock.lock().await;

        let product = self
            .catalog
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {}", product_id)))?;

        let mut cart = self.load(cart_id).await?;
        cart.add_product(&product)?;
        self.carts.save(cart.clone()).await?;

        info!(cart_id = %cart_id, product = %product.name, "Added to cart");
        Ok(self.view(cart))
    }

    /// Remove a product's line from the cart; no-op when absent
    pub async fn remove_item(&self, cart_id: &Uuid, product_id: &str) -> Result<CartView> {
        let _guard = self.session_lock.lock().await;

        let mut cart = self.load(cart_id).await?;
        cart.remove_line(product_id);
        self.carts.save(cart.clone()).await?;

        Ok(self.view(cart))
    }

    /// Update the quantity of an existing line
    pub async fn set_quantity(
        &self,
        cart_id: &Uuid,
        product_id: &str,
        quantity: i64,
    ) -> Result<CartView> {
        let _guard = self.session_lock.lock().await;

        let mut cart = self.load(cart_id).await?;
        cart.set_quantity(product_id, quantity)?;
        self.carts.save(cart.clone()).await?;

        Ok(self.view(cart))
    }

    async fn load(&self, cart_id: &Uuid) -> Result<Cart> {
        self.carts
            .get(cart_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Cart {}", cart_id)))
    }

    fn view(&self, cart: Cart) -> CartView {
        let totals = cart.totals(self.tax_rate);
        CartView::new(cart, totals)
    }
}
