use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::{Category, Collection, ProductId, Size};

/// Product as stored in the database file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntity {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub collection: String,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name.clone(),
            price: product.price,
            category: product.category.to_string(),
            collection: product.collection.to_string(),
            size: product.size.to_string(),
            badge: product.badge.clone(),
            image: product.image.clone(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }

    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        Ok(Product {
            id: ProductId::new(self.id).ok_or_else(RepositoryError::malformed_document)?,
            name: self.name,
            price: self.price,
            category: self
                .category
                .parse::<Category>()
                .map_err(|_| RepositoryError::malformed_document())?,
            collection: self
                .collection
                .parse::<Collection>()
                .map_err(|_| RepositoryError::malformed_document())?,
            size: self
                .size
                .parse::<Size>()
                .map_err(|_| RepositoryError::malformed_document())?,
            badge: self.badge,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
