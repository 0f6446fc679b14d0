use async_trait::async_trait;

use super::errors::{CartClearError, PersistenceError};
use super::order::Order;

/// Persistence capability for orders. A call either durably accepts the
/// order (from the caller's perspective) or fails; no partially-saved order
/// is ever visible to the rest of the system. The order's identifier is
/// assigned before the call, so success carries no return value.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    async fn save(&self, order: &Order) -> Result<(), PersistenceError>;
}

/// Capability to clear the active cart. Must only be invoked after the order
/// has been persisted.
#[async_trait]
pub trait CartService: Send + Sync + 'static {
    async fn clear(&self) -> Result<(), CartClearError>;
}
