use async_trait::async_trait;
use reqwest::Client;

use super::models::OrderPayload;
use crate::domain::errors::PersistenceError;
use crate::domain::order::Order;
use crate::domain::ports::OrderRepository;

/// Adapter that persists orders by POSTing them as JSON to the order API.
///
/// Any 2xx response counts as durable acceptance; everything else, including
/// transport errors, surfaces as a [`PersistenceError`] embedding the
/// underlying status or error text. Timeouts belong to the supplied client.
pub struct OrderApiRepository {
    http: Client,
    endpoint: String,
}

impl OrderApiRepository {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Use a preconfigured client (timeouts, proxies) instead of the default.
    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl OrderRepository for OrderApiRepository {
    async fn save(&self, order: &Order) -> Result<(), PersistenceError> {
        let payload = OrderPayload::from_order(order)?;

        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| PersistenceError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PersistenceError(format!(
                "failed to submit order: {status}"
            )));
        }

        log::debug!("order {} accepted by {}", order.id(), self.endpoint);
        Ok(())
    }
}
