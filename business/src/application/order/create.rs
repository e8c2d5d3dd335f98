use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};

pub struct CreateOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateOrderUseCase for CreateOrderUseCaseImpl {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError> {
        self.logger.info(&format!(
            "Creating order: amount={} status={}",
            params.amount, params.status
        ));

        let order = Order::new(params.amount, params.status)?;
        self.repository.save(&order).await?;

        self.logger
            .info(&format!("Order created with id: {}", order.id));
        Ok(order)
    }
}
