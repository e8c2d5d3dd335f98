use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::order::model::Order;

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    /// Submits the cart total as a paid order.
    ///
    /// The cart is cleared only once the order service acknowledged the
    /// order; on any error it is left exactly as it was.
    async fn execute(&self, cart: &mut Cart) -> Result<Order, CheckoutError>;
}
