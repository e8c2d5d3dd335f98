use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::payment::errors::PaymentError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PaymentError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            PaymentError::AmountInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "payment.amount_invalid",
            ),
            PaymentError::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "ServiceUnavailable",
                "payment.not_configured",
            ),
            PaymentError::ProviderFailed => (
                StatusCode::BAD_GATEWAY,
                "ProviderError",
                "payment.provider_failed",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
