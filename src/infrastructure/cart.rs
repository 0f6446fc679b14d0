use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use bigdecimal::{BigDecimal, Zero};

use crate::domain::errors::CartClearError;
use crate::domain::order::OrderItem;
use crate::domain::ports::CartService;

/// Cart storage for one checkout session: the pending lines plus a running
/// subtotal kept in sync on every mutation.
#[derive(Debug, Default)]
pub struct InMemoryCart {
    state: Mutex<CartState>,
}

#[derive(Debug, Default)]
struct CartState {
    items: Vec<OrderItem>,
    subtotal: BigDecimal,
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, item: OrderItem) {
        let mut state = self.lock();
        state.subtotal += &item.price * BigDecimal::from(item.quantity);
        state.items.push(item);
    }

    pub fn items(&self) -> Vec<OrderItem> {
        self.lock().items.clone()
    }

    pub fn subtotal(&self) -> BigDecimal {
        self.lock().subtotal.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    /// Reset the cart to empty.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.items.clear();
        state.subtotal = BigDecimal::zero();
    }

    fn lock(&self) -> MutexGuard<'_, CartState> {
        // A poisoned lock only means a panic elsewhere mid-mutation; the
        // state itself is a plain list and stays usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Binds an [`InMemoryCart`] to the [`CartService`] port by wrapping its
/// single "reset to empty" operation.
pub struct CartStoreAdapter {
    cart: Arc<InMemoryCart>,
}

impl CartStoreAdapter {
    pub fn new(cart: Arc<InMemoryCart>) -> Self {
        Self { cart }
    }
}

#[async_trait]
impl CartService for CartStoreAdapter {
    async fn clear(&self) -> Result<(), CartClearError> {
        self.cart.clear();
        Ok(())
    }
}
