use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::billing::models::Cart;

/// Cart session storage abstraction
///
/// A cart is created empty per billing session, mutated by the cart service,
/// and deleted once checkout converts it into a bill.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Create a new empty cart session
    async fn create(&self) -> Result<Cart>;

    /// Look up a cart by session ID
    async fn get(&self, id: &Uuid) -> Result<Option<Cart>>;

    /// Persist the current state of a cart
    async fn save(&self, cart: Cart) -> Result<()>;

    /// Destroy a cart session; no-op when absent
    async fn delete(&self, id: &Uuid) -> Result<()>;
}

/// In-memory cart store keyed by session ID
pub struct InMemoryCarts {
    carts: RwLock<HashMap<Uuid, Cart>>,
}

impl InMemoryCarts {
    pub fn new() -> Self {
        Self {
            carts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCarts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartRepository for InMemoryCarts {
    async fn create(&self) -> Result<Cart> {
        let cart = Cart::new();
        let mut carts = self
            .carts
            .write()
            .map_err(|_| AppError::internal("Cart lock poisoned"))?;
        carts.insert(cart.id, cart.clone());
        Ok(cart)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Cart>> {
        let carts = self
            .carts
            .read()
            .map_err(|_| AppError::internal("Cart lock poisoned"))?;
        Ok(carts.get(id).cloned())
    }

    async fn save(&self, cart: Cart) -> Result<()> {
        let mut carts = self
            .carts
            .write()
            .map_err(|_| AppError::internal("Cart lock poisoned"))?;
        carts.insert(cart.id, cart);
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut carts = self
            .carts
            .write()
            .map_err(|_| AppError::internal("Cart lock poisoned"))?;
        carts.remove(id);
        Ok(())
    }
}
