#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.empty_cart")]
    EmptyCart,
    /// The order service could not be reached or rejected the order. The cart
    /// is untouched and the checkout may be retried.
    #[error("checkout.submission_failed")]
    SubmissionFailed { reason: String },
}

impl CheckoutError {
    pub fn submission_failed(reason: impl Into<String>) -> Self {
        CheckoutError::SubmissionFailed {
            reason: reason.into(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, CheckoutError::SubmissionFailed { .. })
    }
}
