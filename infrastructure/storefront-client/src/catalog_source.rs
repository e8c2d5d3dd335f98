use async_trait::async_trait;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::source::CatalogSource;
use business::domain::product::model::Product;

use crate::client::StorefrontClient;
use crate::dto::ProductDto;

#[async_trait]
impl CatalogSource for StorefrontClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get(self.products_url())
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(CatalogError::Unavailable {
                reason: format!("status {}", response.status()),
            });
        }

        let dtos: Vec<ProductDto> =
            response
                .json()
                .await
                .map_err(|e| CatalogError::MalformedResponse {
                    reason: e.to_string(),
                })?;

        dtos.into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|reason| CatalogError::MalformedResponse { reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{FailMode, spawn};

    #[tokio::test]
    async fn should_fetch_catalog() {
        let base = spawn(FailMode::None).await;

        let products = StorefrontClient::new(base).fetch_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "Classic Black Silk Slim Fit Shirt");
    }

    #[tokio::test]
    async fn should_report_unavailable_on_server_error() {
        let base = spawn(FailMode::ServerError).await;

        let err = StorefrontClient::new(base).fetch_products().await.unwrap_err();

        assert!(matches!(err, CatalogError::Unavailable { .. }));
        assert!(err.reason().contains("500"));
    }

    #[tokio::test]
    async fn should_report_malformed_body() {
        let base = spawn(FailMode::Garbage).await;

        let err = StorefrontClient::new(base).fetch_products().await.unwrap_err();

        assert!(matches!(err, CatalogError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn should_report_unavailable_when_unreachable() {
        let err = StorefrontClient::new("http://127.0.0.1:9")
            .fetch_products()
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Unavailable { .. }));
    }
}
