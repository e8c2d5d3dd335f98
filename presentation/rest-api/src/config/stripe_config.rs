use std::env;

use stripe::client::{DEFAULT_API_BASE, DEFAULT_CURRENCY};

/// Configuration for the payment provider.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub secret_key: Option<String>,
    pub currency: String,
    pub api_base: String,
}

impl StripeConfig {
    /// Environment variables:
    /// - STRIPE_SECRET_KEY: secret API key; payment intents answer 503 without it
    /// - STRIPE_CURRENCY: ISO currency code (default: "usd")
    /// - STRIPE_API_BASE: API root (default: "https://api.stripe.com/v1")
    pub fn from_env() -> Self {
        Self {
            secret_key: env::var("STRIPE_SECRET_KEY").ok(),
            currency: env::var("STRIPE_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string()),
            api_base: env::var("STRIPE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        }
    }
}
