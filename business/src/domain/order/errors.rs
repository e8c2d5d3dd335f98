#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.amount_invalid")]
    AmountInvalid,
    #[error("order.status_empty")]
    StatusEmpty,
    #[error("order.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
