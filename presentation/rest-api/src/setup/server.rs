use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// API under `/api`, Swagger UI under `/docs`, spec under `/openapi.json`.
    pub fn routes(container: DependencyContainer, public_url: &str) -> Route {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.order_api,
                container.payment_api,
            ),
            "Luxe Storefront API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("{}/api", public_url));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, &format!("http://{}", addr))
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use poem::listener::{Acceptor, TcpAcceptor};

    use business::application::catalog::load::LoadCatalogUseCaseImpl;
    use business::application::checkout::submit::CheckoutUseCaseImpl;
    use business::domain::cart::model::Cart;
    use business::domain::catalog::browser::CatalogBrowser;
    use business::domain::catalog::filter::Selector;
    use business::domain::catalog::use_cases::load::LoadCatalogUseCase;
    use business::domain::checkout::use_cases::submit::CheckoutUseCase;
    use business::domain::product::value_objects::Category;
    use logger::TracingLogger;
    use storefront_client::client::StorefrontClient;

    use super::*;
    use crate::setup::test_support::TestApp;

    #[tokio::test]
    async fn should_serve_openapi_document() {
        let app = TestApp::empty().await;

        let resp = app.client.get("/openapi.json").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let paths = json.value().object().get("paths").object();
        assert!(paths.get_opt("/products/{id}").is_some());
        assert!(paths.get_opt("/orders/create-payment-intent").is_some());
    }

    #[tokio::test]
    async fn should_browse_and_check_out_against_running_server() {
        let app = TestApp::seeded(48).await;
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let acceptor = TcpAcceptor::from_tokio(listener).unwrap();
        let addr = acceptor.local_addr()[0].as_socket_addr().cloned().unwrap();
        let base = format!("http://{}", addr);
        let routes = Server::routes(app.container().await, &base);
        tokio::spawn(PoemServer::new_with_acceptor(acceptor).run(routes));

        let client = Arc::new(StorefrontClient::new(base));
        let logger = Arc::new(TracingLogger::new("storefront"));

        let mut browser = CatalogBrowser::new();
        LoadCatalogUseCaseImpl {
            source: client.clone(),
            logger: logger.clone(),
        }
        .execute(&mut browser)
        .await;

        let view = browser.view();
        assert_eq!(view.total_matches, 48);
        assert_eq!(view.items.len(), 24);
        assert!(view.show_pagination);

        browser.set_category(Selector::Only(Category::Watch));
        let watches = browser.view();
        assert_eq!(watches.total_matches, 6);
        assert!(!watches.show_pagination);

        let mut cart = Cart::new();
        cart.add_to_cart(watches.items[0]);
        cart.add_to_cart(watches.items[0]);
        cart.add_to_cart(watches.items[1]);
        let expected_total = cart.total();

        let order = CheckoutUseCaseImpl {
            submitter: client,
            logger,
        }
        .execute(&mut cart)
        .await
        .unwrap();

        assert!(cart.is_empty());
        assert_eq!(order.status, "paid");
        assert_eq!(order.amount, expected_total);

        let stored = app.db.read().await.unwrap();
        assert_eq!(stored.orders.len(), 1);
        assert_eq!(stored.orders[0].id, order.id);
    }
}
