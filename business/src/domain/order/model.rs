use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::OrderError;

/// Status the storefront records once a payment has gone through.
pub const STATUS_PAID: &str = "paid";

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(amount: f64, status: String) -> Result<Self, OrderError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(OrderError::AmountInvalid);
        }
        if status.trim().is_empty() {
            return Err(OrderError::StatusEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            amount,
            status,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: String,
        amount: f64,
        status: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            amount,
            status,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_paid_order_with_server_assigned_fields() {
        let order = Order::new(249.5, STATUS_PAID.to_string()).unwrap();

        assert_eq!(order.amount, 249.5);
        assert_eq!(order.status, "paid");
        assert!(Uuid::parse_str(&order.id).is_ok());
    }

    #[test]
    fn should_allow_zero_amount() {
        assert!(Order::new(0.0, STATUS_PAID.to_string()).is_ok());
    }

    #[test]
    fn should_reject_negative_amount() {
        let result = Order::new(-1.0, STATUS_PAID.to_string());
        assert!(matches!(result, Err(OrderError::AmountInvalid)));
    }

    #[test]
    fn should_reject_blank_status() {
        let result = Order::new(10.0, "  ".to_string());
        assert!(matches!(result, Err(OrderError::StatusEmpty)));
    }

    #[test]
    fn should_give_each_order_a_distinct_id() {
        let first = Order::new(1.0, STATUS_PAID.to_string()).unwrap();
        let second = Order::new(1.0, STATUS_PAID.to_string()).unwrap();
        assert_ne!(first.id, second.id);
    }
}
