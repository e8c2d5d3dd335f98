use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProductProps, Product, ProductPatch};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::ProductEntity;
use crate::db::JsonDatabase;

pub struct ProductRepositoryJson {
    db: Arc<JsonDatabase>,
}

impl ProductRepositoryJson {
    pub fn new(db: Arc<JsonDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryJson {
    /// Rows that no longer map to a product are logged and left out.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let document = self.db.read().await?;
        let products = document
            .products
            .into_iter()
            .filter_map(|entity| {
                let id = entity.id;
                entity
                    .into_domain()
                    .inspect_err(|err| {
                        tracing::warn!(id, error = %err, "Skipping unreadable product");
                    })
                    .ok()
            })
            .collect();
        Ok(products)
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let document = self.db.read().await?;
        document
            .products
            .into_iter()
            .find(|p| p.id == id.value())
            .ok_or(RepositoryError::NotFound)?
            .into_domain()
    }

    async fn create(&self, props: NewProductProps) -> Result<Product, RepositoryError> {
        self.db
            .update(|document| {
                let last = document.products.iter().map(|p| p.id).max().unwrap_or(0);
                let id = last
                    .checked_add(1)
                    .and_then(ProductId::new)
                    .ok_or_else(RepositoryError::persistence)?;

                let product = Product::from_new(id, props, Utc::now());
                document.products.push(ProductEntity::from_domain(&product));
                Ok(product)
            })
            .await
    }

    async fn update(
        &self,
        id: ProductId,
        patch: ProductPatch,
        now: DateTime<Utc>,
    ) -> Result<Product, RepositoryError> {
        self.db
            .update(|document| {
                let stored = document
                    .products
                    .iter_mut()
                    .find(|p| p.id == id.value())
                    .ok_or(RepositoryError::NotFound)?;
                let mut product = stored.clone().into_domain()?;
                product.merge(patch, now);
                *stored = ProductEntity::from_domain(&product);
                Ok(product)
            })
            .await
    }

    async fn delete(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.db
            .update(|document| {
                let index = document
                    .products
                    .iter()
                    .position(|p| p.id == id.value())
                    .ok_or(RepositoryError::NotFound)?;
                document.products.remove(index).into_domain()
            })
            .await
    }
}
