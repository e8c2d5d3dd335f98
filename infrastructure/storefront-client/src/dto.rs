use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::checkout::services::OrderRequest;
use business::domain::order::model::Order;
use business::domain::product::model::Product;
use business::domain::product::value_objects::{Category, Collection, ProductId, Size};

/// Product as served by `GET /api/products`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub collection: String,
    pub size: String,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ProductDto> for Product {
    type Error = String;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::new(dto.id).ok_or_else(|| format!("Invalid product id: {}", dto.id))?,
            name: dto.name,
            price: dto.price,
            category: dto.category.parse::<Category>()?,
            collection: dto.collection.parse::<Collection>()?,
            size: dto.size.parse::<Size>()?,
            badge: dto.badge,
            image: dto.image,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        })
    }
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequestDto {
    pub amount: f64,
    pub status: String,
}

impl From<OrderRequest> for OrderRequestDto {
    fn from(request: OrderRequest) -> Self {
        Self {
            amount: request.amount,
            status: request.status,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: String,
    pub amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<OrderDto> for Order {
    fn from(dto: OrderDto) -> Self {
        Order::from_repository(dto.id, dto.amount, dto.status, dto.created_at)
    }
}
