use async_trait::async_trait;
use chrono::Utc;

use business::domain::checkout::errors::CheckoutError;
use business::domain::checkout::services::{OrderRequest, OrderSubmitter};
use business::domain::order::model::Order;

use crate::client::StorefrontClient;
use crate::dto::{OrderDto, OrderRequestDto};

#[async_trait]
impl OrderSubmitter for StorefrontClient {
    async fn submit_order(&self, request: OrderRequest) -> Result<Order, CheckoutError> {
        let body = OrderRequestDto::from(request.clone());

        let response = self
            .client
            .post(self.orders_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| CheckoutError::submission_failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckoutError::submission_failed(format!("status {}", status)));
        }

        // Any 2xx means the order exists; an unreadable body must not turn it
        // into a retryable failure.
        match response.json::<OrderDto>().await {
            Ok(dto) => Ok(dto.into()),
            Err(err) => {
                tracing::warn!(error = %err, "Order accepted with unreadable body");
                Ok(Order::from_repository(
                    String::new(),
                    request.amount,
                    request.status,
                    Utc::now(),
                ))
            }
        }
    }
}
