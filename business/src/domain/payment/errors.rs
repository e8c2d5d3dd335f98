#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment.amount_invalid")]
    AmountInvalid,
    #[error("payment.not_configured")]
    NotConfigured,
    #[error("payment.provider_failed")]
    ProviderFailed,
}
