use thiserror::Error;

/// One of the four order validation checks failed. Checks run in a fixed
/// order and the first failure is reported, so the message can be shown to
/// the user as-is. No side effects have occurred when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("order must contain at least one item, each with a positive id, price and quantity plus a name and an image")]
    InvalidItems,
    #[error("shipping details are incomplete or the email address is malformed")]
    InvalidShipping,
    #[error("payment details are invalid for the selected method")]
    InvalidPayment,
    #[error("order totals are inconsistent")]
    InvalidTotals,
}

/// The order could not be persisted. Nothing was durably recorded, so the
/// caller may retry the whole submission from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("order submission failed: {0}")]
pub struct PersistenceError(pub String);

/// The active cart could not be cleared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cart could not be cleared: {0}")]
pub struct CartClearError(pub String);

/// Failure signal of the submit-order flow, one variant per phase.
#[derive(Debug, Error)]
pub enum SubmitOrderError {
    #[error("invalid order data provided: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// The order was persisted but the cart was left untouched. Re-running
    /// the submission would create a duplicate order; only the cart clear is
    /// safe to retry.
    #[error("order {order_id} was placed but the cart could not be cleared: {source}")]
    CartClear {
        order_id: String,
        source: CartClearError,
    },
}
