use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;

use super::entity::OrderEntity;
use crate::db::JsonDatabase;

pub struct OrderRepositoryJson {
    db: Arc<JsonDatabase>,
}

impl OrderRepositoryJson {
    pub fn new(db: Arc<JsonDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryJson {
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let document = self.db.read().await?;
        Ok(document
            .orders
            .into_iter()
            .map(OrderEntity::into_domain)
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Order, RepositoryError> {
        let document = self.db.read().await?;
        document
            .orders
            .into_iter()
            .find(|o| o.id == id)
            .map(OrderEntity::into_domain)
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        self.db
            .update(|document| {
                if document.orders.iter().any(|o| o.id == order.id) {
                    return Err(RepositoryError::duplicated());
                }
                document.orders.push(OrderEntity::from_domain(order));
                Ok(())
            })
            .await
    }
}
