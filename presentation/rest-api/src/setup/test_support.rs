//! Route test harness backed by a scratch database file.

use std::sync::Arc;

use poem::Route;
use poem::listener::{Acceptor, TcpAcceptor};
use poem::test::TestClient;
use poem::web::Json;
use poem::{handler, post};
use tempfile::TempDir;

use persistence::db::JsonDatabase;

use crate::config::stripe_config::StripeConfig;
use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::server::Server;

pub struct TestApp {
    pub client: TestClient<Route>,
    pub db: Arc<JsonDatabase>,
    stripe: StripeConfig,
    _dir: TempDir,
}

impl TestApp {
    /// Empty database, payments not configured.
    pub async fn empty() -> Self {
        Self::build(0, unconfigured_stripe()).await
    }

    /// Deterministic catalog of `count` products, payments not configured.
    pub async fn seeded(count: usize) -> Self {
        Self::build(count, unconfigured_stripe()).await
    }

    /// Empty database with payments routed to `api_base`.
    pub async fn with_payments(api_base: &str) -> Self {
        let stripe = StripeConfig {
            secret_key: Some("sk_test_storefront".to_string()),
            currency: "usd".to_string(),
            api_base: api_base.to_string(),
        };
        Self::build(0, stripe).await
    }

    /// A fresh container over the same database, for serving over a real socket.
    pub async fn container(&self) -> DependencyContainer {
        DependencyContainer::new(self.db.clone(), &self.stripe)
            .await
            .unwrap()
    }

    async fn build(count: usize, stripe: StripeConfig) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = Arc::new(JsonDatabase::new(dir.path().join("db.json")));
        if count > 0 {
            db.ensure_seeded(count, Some(11)).await.unwrap();
        }
        let container = DependencyContainer::new(db.clone(), &stripe).await.unwrap();
        let client = TestClient::new(Server::routes(container, "http://localhost"));

        Self {
            client,
            db,
            stripe,
            _dir: dir,
        }
    }
}

fn unconfigured_stripe() -> StripeConfig {
    StripeConfig {
        secret_key: None,
        currency: "usd".to_string(),
        api_base: "http://127.0.0.1:9/v1".to_string(),
    }
}

#[handler]
fn payment_intents(body: String) -> Json<serde_json::Value> {
    let field = |name: &str| {
        body.split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{}=", name)).map(str::to_string))
            .unwrap_or_default()
    };
    Json(serde_json::json!({
        "client_secret": format!("pi_{}_{}_secret_test", field("amount"), field("currency"))
    }))
}

/// Starts a stand-in payment provider and returns its API root.
pub async fn spawn_payment_provider() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let acceptor = TcpAcceptor::from_tokio(listener).unwrap();
    let addr = acceptor.local_addr()[0].as_socket_addr().cloned().unwrap();
    let app = Route::new().at("/v1/payment_intents", post(payment_intents));
    tokio::spawn(poem::Server::new_with_acceptor(acceptor).run(app));
    format!("http://{}/v1", addr)
}
