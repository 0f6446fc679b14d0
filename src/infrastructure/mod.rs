pub mod cart;
pub mod models;
pub mod order_api;
