use async_trait::async_trait;

use crate::domain::order::model::Order;

use super::errors::CheckoutError;

/// Payload sent to the order service when a cart is checked out.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub amount: f64,
    pub status: String,
}

/// Port for the order service the storefront submits paid carts to.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    /// Returns the order as acknowledged (and persisted) by the service.
    async fn submit_order(&self, request: OrderRequest) -> Result<Order, CheckoutError>;
}
