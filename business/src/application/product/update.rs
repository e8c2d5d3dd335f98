use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

fn not_found_or_repository(e: RepositoryError) -> ProductError {
    match e {
        RepositoryError::NotFound => ProductError::NotFound,
        other => ProductError::Repository(other),
    }
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        params.patch.validate()?;

        let product = self
            .repository
            .update(params.id, params.patch, Utc::now())
            .await
            .map_err(not_found_or_repository)?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
