use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let props = NewProductProps {
            name: params.name,
            price: params.price,
            category: params.category,
            collection: params.collection,
            size: params.size,
            badge: params.badge,
            image: params.image,
        };
        props.validate()?;

        let product = self.repository.create(props).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::{Category, Collection, ProductId, Size};
    use crate::test_support::{MockProductRepo, mock_logger};
    use chrono::Utc;

    fn params(name: &str, price: f64) -> CreateProductParams {
        CreateProductParams {
            name: name.to_string(),
            price,
            category: Category::Perfume,
            collection: Collection::New,
            size: Size::Regular,
            badge: Some("New Arrival".to_string()),
            image: "https://picsum.photos/seed/perfume1/400/500".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_product_with_repository_assigned_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|props| Ok(Product::from_new(ProductId::new(1001).unwrap(), props, Utc::now())));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(params("Elite Navy Silk Woody Perfume", 289.0))
            .await
            .unwrap();

        assert_eq!(product.id.value(), 1001);
        assert_eq!(product.category, Category::Perfume);
        assert!(product.created_at.is_some());
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("", 10.0)).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_product_when_price_not_positive() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Cologne", 0.0)).await;

        assert!(matches!(result.unwrap_err(), ProductError::PriceInvalid));
    }
}
