use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::payment::errors::PaymentError;
use crate::domain::payment::services::{PaymentGateway, PaymentIntent, to_minor_units};
use crate::domain::payment::use_cases::create_intent::{
    CreatePaymentIntentParams, CreatePaymentIntentUseCase,
};

pub struct CreatePaymentIntentUseCaseImpl {
    pub gateway: Arc<dyn PaymentGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreatePaymentIntentUseCase for CreatePaymentIntentUseCaseImpl {
    async fn execute(
        &self,
        params: CreatePaymentIntentParams,
    ) -> Result<PaymentIntent, PaymentError> {
        let amount_minor = to_minor_units(params.amount).ok_or(PaymentError::AmountInvalid)?;

        self.logger.info(&format!(
            "Creating payment intent for {} minor units",
            amount_minor
        ));

        match self.gateway.create_payment_intent(amount_minor).await {
            Ok(intent) => Ok(intent),
            Err(err) => {
                self.logger
                    .error(&format!("Payment intent creation failed: {}", err));
                Err(err)
            }
        }
    }
}
