use async_trait::async_trait;

use crate::domain::payment::errors::PaymentError;
use crate::domain::payment::services::PaymentIntent;

pub struct CreatePaymentIntentParams {
    /// Amount in currency units, as shown at checkout.
    pub amount: f64,
}

#[async_trait]
pub trait CreatePaymentIntentUseCase: Send + Sync {
    async fn execute(&self, params: CreatePaymentIntentParams)
    -> Result<PaymentIntent, PaymentError>;
}
