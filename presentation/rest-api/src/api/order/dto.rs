use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::model::Order;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Order total in currency units
    pub amount: f64,
    /// Payment status, e.g. "paid"
    pub status: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            amount: order.amount,
            status: order.status,
            created_at: order.created_at,
        }
    }
}
