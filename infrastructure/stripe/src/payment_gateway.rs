use async_trait::async_trait;
use serde::Deserialize;

use business::domain::payment::errors::PaymentError;
use business::domain::payment::services::{PaymentGateway, PaymentIntent};

use crate::client::StripeClient;

#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    client_secret: Option<String>,
}

pub struct PaymentGatewayStripe {
    client: StripeClient,
}

impl PaymentGatewayStripe {
    pub fn new(client: StripeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentGateway for PaymentGatewayStripe {
    async fn create_payment_intent(&self, amount_minor: u64) -> Result<PaymentIntent, PaymentError> {
        let secret_key = self
            .client
            .secret_key
            .as_deref()
            .ok_or(PaymentError::NotConfigured)?;

        let form = [
            ("amount", amount_minor.to_string()),
            ("currency", self.client.currency.clone()),
        ];

        let response = self
            .client
            .client
            .post(self.client.payment_intents_url())
            .bearer_auth(secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Payment provider unreachable");
                PaymentError::ProviderFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "Payment provider rejected the request");
            return Err(PaymentError::ProviderFailed);
        }

        let data: PaymentIntentResponse = response
            .json()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "Unreadable payment intent response");
                PaymentError::ProviderFailed
            })?;

        let client_secret = data
            .client_secret
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                tracing::error!("Payment intent response has no client secret");
                PaymentError::ProviderFailed
            })?;

        Ok(PaymentIntent { client_secret })
    }
}
