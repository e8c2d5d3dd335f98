use poem_openapi::Object;

use business::domain::payment::services::PaymentIntent;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    /// Amount to charge in currency units
    pub amount: f64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    /// Secret the browser uses to confirm the payment with the provider
    pub client_secret: String,
}

impl From<PaymentIntent> for PaymentIntentResponse {
    fn from(intent: PaymentIntent) -> Self {
        Self {
            client_secret: intent.client_secret,
        }
    }
}
