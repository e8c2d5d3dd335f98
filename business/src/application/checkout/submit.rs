use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::{Cart, format_amount};
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::services::{OrderRequest, OrderSubmitter};
use crate::domain::checkout::use_cases::submit::CheckoutUseCase;
use crate::domain::logger::Logger;
use crate::domain::order::model::{Order, STATUS_PAID};

pub struct CheckoutUseCaseImpl {
    pub submitter: Arc<dyn OrderSubmitter>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, cart: &mut Cart) -> Result<Order, CheckoutError> {
        if cart.is_empty() {
            self.logger.warn("Checkout requested with an empty cart");
            return Err(CheckoutError::EmptyCart);
        }

        let amount = cart.total();
        self.logger.info(&format!(
            "Submitting order for {} items, total {}",
            cart.item_count(),
            format_amount(amount)
        ));

        let request = OrderRequest {
            amount,
            status: STATUS_PAID.to_string(),
        };

        match self.submitter.submit_order(request).await {
            Ok(order) => {
                cart.clear_cart();
                self.logger
                    .info(&format!("Order {} confirmed, cart cleared", order.id));
                Ok(order)
            }
            Err(err) => {
                self.logger.error(&format!("Error creating order: {:?}", err));
                Err(err)
            }
        }
    }
}
