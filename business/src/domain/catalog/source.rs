use async_trait::async_trait;

use crate::domain::product::model::Product;

use super::errors::CatalogError;

/// Port for wherever the storefront gets its catalog from (the product service).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}
