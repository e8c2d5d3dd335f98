use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::payment::use_cases::create_intent::{
    CreatePaymentIntentParams, CreatePaymentIntentUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::payment::dto::{CreatePaymentIntentRequest, PaymentIntentResponse};
use crate::api::tags::ApiTags;

pub struct PaymentApi {
    create_intent_use_case: Arc<dyn CreatePaymentIntentUseCase>,
}

impl PaymentApi {
    pub fn new(create_intent_use_case: Arc<dyn CreatePaymentIntentUseCase>) -> Self {
        Self {
            create_intent_use_case,
        }
    }
}

#[OpenApi]
impl PaymentApi {
    /// Create a payment intent
    ///
    /// Asks the payment provider for an intent covering `amount` and returns
    /// the client secret the browser needs to confirm the payment.
    #[oai(
        path = "/orders/create-payment-intent",
        method = "post",
        tag = "ApiTags::Payments"
    )]
    async fn create_payment_intent(
        &self,
        body: Json<CreatePaymentIntentRequest>,
    ) -> CreatePaymentIntentResponse {
        match self
            .create_intent_use_case
            .execute(CreatePaymentIntentParams {
                amount: body.0.amount,
            })
            .await
        {
            Ok(intent) => CreatePaymentIntentResponse::Ok(Json(intent.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreatePaymentIntentResponse::BadRequest(json),
                    503 => CreatePaymentIntentResponse::ServiceUnavailable(json),
                    _ => CreatePaymentIntentResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreatePaymentIntentResponse {
    #[oai(status = 200)]
    Ok(Json<PaymentIntentResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
