pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::submit_order::SubmitOrder;
pub use domain::errors::{CartClearError, PersistenceError, SubmitOrderError, ValidationError};
pub use domain::order::{Order, OrderData, OrderItem, PaymentInfo, ShippingInfo};
pub use domain::ports::{CartService, OrderRepository};
pub use domain::totals::{compute_totals, Totals, SHIPPING_FEE};
pub use infrastructure::cart::{CartStoreAdapter, InMemoryCart};
pub use infrastructure::order_api::OrderApiRepository;
