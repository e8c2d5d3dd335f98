use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{Category, Collection, Size};

pub struct CreateProductParams {
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub collection: Collection,
    pub size: Size,
    pub badge: Option<String>,
    pub image: String,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
