//! Port mocks shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::source::CatalogSource;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::services::{OrderRequest, OrderSubmitter};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::payment::errors::PaymentError;
use crate::domain::payment::services::{PaymentGateway, PaymentIntent};
use crate::domain::product::model::{NewProductProps, Product, ProductPatch};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::{Category, Collection, ProductId, Size};

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
        async fn create(&self, props: NewProductProps) -> Result<Product, RepositoryError>;
        async fn update(&self, id: ProductId, patch: ProductPatch, now: DateTime<Utc>) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: ProductId) -> Result<Product, RepositoryError>;
    }
}

mock! {
    pub OrderRepo {}

    #[async_trait]
    impl OrderRepository for OrderRepo {
        async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
        async fn get_by_id(&self, id: &str) -> Result<Order, RepositoryError>;
        async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Gateway {}

    #[async_trait]
    impl PaymentGateway for Gateway {
        async fn create_payment_intent(&self, amount_minor: u64) -> Result<PaymentIntent, PaymentError>;
    }
}

mock! {
    pub Source {}

    #[async_trait]
    impl CatalogSource for Source {
        async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
    }
}

mock! {
    pub Submitter {}

    #[async_trait]
    impl OrderSubmitter for Submitter {
        async fn submit_order(&self, request: OrderRequest) -> Result<Order, CheckoutError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn product(id: u32, name: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(id).unwrap(),
        name: name.to_string(),
        price,
        category: Category::Shoes,
        collection: Collection::New,
        size: Size::Regular,
        badge: None,
        image: format!("https://picsum.photos/seed/shoes{}/400/500", id),
        created_at: None,
        updated_at: None,
    }
}
