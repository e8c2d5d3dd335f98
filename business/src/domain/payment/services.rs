use async_trait::async_trait;

use super::errors::PaymentError;

/// Handle the browser needs to confirm a payment with the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntent {
    pub client_secret: String,
}

/// Service port for the payment provider.
///
/// Amounts are in minor currency units (cents); the adapter owns the currency.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment_intent(&self, amount_minor: u64) -> Result<PaymentIntent, PaymentError>;
}

/// Converts a currency amount to minor units, rounding to the nearest cent.
pub fn to_minor_units(amount: f64) -> Option<u64> {
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }
    let cents = (amount * 100.0).round();
    if cents < 1.0 || cents > u64::MAX as f64 {
        return None;
    }
    Some(cents as u64)
}
