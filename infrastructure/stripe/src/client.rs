use reqwest::Client;

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com/v1";
pub const DEFAULT_CURRENCY: &str = "usd";

/// Shared Stripe HTTP client configuration.
pub struct StripeClient {
    pub client: Client,
    pub secret_key: Option<String>,
    pub currency: String,
    pub base_url: String,
}

impl StripeClient {
    pub fn new(secret_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            secret_key: secret_key.filter(|k| !k.trim().is_empty()),
            currency: DEFAULT_CURRENCY.to_string(),
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into().to_lowercase();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.secret_key.is_some()
    }

    /// Returns the payment intents endpoint URL.
    pub fn payment_intents_url(&self) -> String {
        format!("{}/payment_intents", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_blank_key_as_not_configured() {
        assert!(!StripeClient::new(None).is_configured());
        assert!(!StripeClient::new(Some("  ".to_string())).is_configured());
        assert!(StripeClient::new(Some("sk_test_123".to_string())).is_configured());
    }

    #[test]
    fn should_build_endpoint_without_double_slash() {
        let client = StripeClient::new(None).with_base_url("http://127.0.0.1:9000/v1/");
        assert_eq!(
            client.payment_intents_url(),
            "http://127.0.0.1:9000/v1/payment_intents"
        );
    }

    #[test]
    fn should_default_to_usd() {
        assert_eq!(StripeClient::new(None).currency, "usd");
        assert_eq!(StripeClient::new(None).with_currency("EUR").currency, "eur");
    }
}
