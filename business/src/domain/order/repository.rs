use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn get_by_id(&self, id: &str) -> Result<Order, RepositoryError>;
    /// Appends a new order; `Duplicated` if the id is already taken.
    async fn save(&self, order: &Order) -> Result<(), RepositoryError>;
}
