use crate::domain::errors::SubmitOrderError;
use crate::domain::order::{Order, OrderData};
use crate::domain::ports::{CartService, OrderRepository};

/// Orchestrates one checkout attempt: construct, validate, persist, clear
/// the cart, in that order and with no step skipped.
///
/// This is not a transaction. Persisting before clearing is deliberate:
/// losing cart state is preferable to losing a submitted order, so the cart
/// clear runs last. If it fails the order already exists durably and the
/// error tells the caller which order must not be resubmitted.
pub struct SubmitOrder<R, C> {
    repository: R,
    cart: C,
}

impl<R: OrderRepository, C: CartService> SubmitOrder<R, C> {
    pub fn new(repository: R, cart: C) -> Self {
        Self { repository, cart }
    }

    pub async fn execute(&self, data: OrderData) -> Result<Order, SubmitOrderError> {
        let order = Order::new(data);
        order.validate()?;

        self.repository.save(&order).await?;

        self.cart
            .clear()
            .await
            .map_err(|source| SubmitOrderError::CartClear {
                order_id: order.id().to_string(),
                source,
            })?;

        Ok(order)
    }
}
