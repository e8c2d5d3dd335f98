use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// HTTP client for the storefront's product and order service.
pub struct StorefrontClient {
    pub client: Client,
    pub base_url: String,
}

impl StorefrontClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    pub fn orders_url(&self) -> String {
        format!("{}/api/orders", self.base_url)
    }
}

impl Default for StorefrontClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
