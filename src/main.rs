use std::env;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use checkout_core::{
    compute_totals, CartStoreAdapter, InMemoryCart, OrderApiRepository, OrderData, OrderItem,
    PaymentInfo, ShippingInfo, SubmitOrder,
};
use dotenvy::dotenv;

/// Submits a sample checkout against the configured order API, wiring the
/// real adapters end to end.
#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let endpoint = env::var("ORDER_API_URL")
        .unwrap_or_else(|_| "http://localhost:3000/api/submit-order".to_string());

    // Seed the cart the way the storefront would.
    let cart = Arc::new(InMemoryCart::new());
    cart.add(OrderItem {
        id: 1,
        name: "XX99 Mark II Headphones".to_string(),
        price: BigDecimal::from(2999),
        quantity: 1,
        image: "/assets/xx99-mark-two.jpg".to_string(),
    });
    cart.add(OrderItem {
        id: 4,
        name: "ZX9 Speaker".to_string(),
        price: BigDecimal::from(4500),
        quantity: 2,
        image: "/assets/zx9-speaker.jpg".to_string(),
    });

    let order_data = OrderData {
        items: cart.items(),
        shipping: ShippingInfo {
            name: "Alexei Ward".to_string(),
            email: "alexei@mail.com".to_string(),
            phone: "+1 202-555-0136".to_string(),
            address: "1137 Williams Avenue".to_string(),
            zip_code: "10001".to_string(),
            city: "New York".to_string(),
            country: "United States".to_string(),
        },
        payment: PaymentInfo::Cash,
        totals: compute_totals(cart.subtotal()),
    };

    log::info!("Submitting demo order to {}", endpoint);

    let checkout = SubmitOrder::new(
        OrderApiRepository::new(endpoint),
        CartStoreAdapter::new(cart.clone()),
    );

    match checkout.execute(order_data).await {
        Ok(order) => log::info!(
            "Order {} accepted, grand total {}",
            order.id(),
            order.totals().grand_total
        ),
        Err(err) => {
            log::error!("Checkout failed: {err}");
            std::process::exit(1);
        }
    }
}
