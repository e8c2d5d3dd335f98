use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};
use business::domain::order::use_cases::get_all::GetAllOrdersUseCase;
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{CreateOrderRequest, OrderResponse};
use crate::api::tags::ApiTags;

pub struct OrderApi {
    create_use_case: Arc<dyn CreateOrderUseCase>,
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
}

impl OrderApi {
    pub fn new(
        create_use_case: Arc<dyn CreateOrderUseCase>,
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
        }
    }
}

/// Order API
#[OpenApi]
impl OrderApi {
    /// List orders
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all_orders(&self) -> GetAllOrdersResponse {
        match self.get_all_use_case.execute().await {
            Ok(orders) => {
                GetAllOrdersResponse::Ok(Json(orders.into_iter().map(|o| o.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllOrdersResponse::InternalError(json)
            }
        }
    }

    /// Get an order by ID
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_by_id(&self, id: Path<String>) -> GetOrderByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetOrderByIdParams { id: id.0 })
            .await
        {
            Ok(order) => GetOrderByIdResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderByIdResponse::NotFound(json),
                    _ => GetOrderByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create an order
    ///
    /// Records a checkout. The server assigns the id and creation time.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn create_order(&self, body: Json<CreateOrderRequest>) -> CreateOrderResponse {
        let params = CreateOrderParams {
            amount: body.0.amount,
            status: body.0.status,
        };

        match self.create_use_case.execute(params).await {
            Ok(order) => CreateOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateOrderResponse::BadRequest(json),
                    _ => CreateOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderByIdResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use serde_json::json;

    use crate::setup::test_support::TestApp;

    #[tokio::test]
    async fn should_create_and_fetch_order() {
        let app = TestApp::empty().await;

        let resp = app
            .client
            .post("/api/orders")
            .body_json(&json!({ "amount": 259.98, "status": "paid" }))
            .send()
            .await;
        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        let created = json.value().object();
        created.get("status").assert_string("paid");
        let id = created.get("id").string().to_string();

        let resp = app.client.get(format!("/api/orders/{}", id)).send().await;
        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("amount")
            .assert_f64(259.98);

        let resp = app.client.get("/api/orders").send().await;
        resp.assert_status_is_ok();
        assert_eq!(resp.json().await.value().array().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_negative_amount() {
        let app = TestApp::empty().await;

        let resp = app
            .client
            .post("/api/orders")
            .body_json(&json!({ "amount": -1.0, "status": "paid" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("order.amount_invalid");
    }

    #[tokio::test]
    async fn should_report_unknown_order() {
        let app = TestApp::empty().await;

        let resp = app.client.get("/api/orders/does-not-exist").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }
}
