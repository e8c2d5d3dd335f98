use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::RepositoryError;

use super::model::{NewProductProps, Product, ProductPatch};
use super::value_objects::ProductId;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in stored order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// Appends a product with the next free id (`max(id) + 1`, starting at 1).
    async fn create(&self, props: NewProductProps) -> Result<Product, RepositoryError>;
    /// Merges a validated `patch` into the stored product as one atomic
    /// read-modify-write and returns the result.
    async fn update(
        &self,
        id: ProductId,
        patch: ProductPatch,
        now: DateTime<Utc>,
    ) -> Result<Product, RepositoryError>;
    /// Removes the product and returns it.
    async fn delete(&self, id: ProductId) -> Result<Product, RepositoryError>;
}
