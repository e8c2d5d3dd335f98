use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::order::model::Order;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEntity {
    pub id: String,
    pub amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn from_domain(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            amount: order.amount,
            status: order.status.clone(),
            created_at: order.created_at,
        }
    }

    pub fn into_domain(self) -> Order {
        Order::from_repository(self.id, self.amount, self.status, self.created_at)
    }
}
