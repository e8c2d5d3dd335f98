//! Stand-in storefront service for adapter tests.

use poem::http::StatusCode;
use poem::listener::{Acceptor, TcpAcceptor};
use poem::web::{Data, Json};
use poem::{EndpointExt, IntoResponse, Response, Route, Server, get, handler, post};
use serde_json::{Value, json};

#[derive(Clone, Copy)]
pub enum FailMode {
    None,
    ServerError,
    Garbage,
}

#[handler]
fn products(Data(mode): Data<&FailMode>) -> Response {
    match mode {
        FailMode::None => Json(json!([
            {"id": 1, "name": "Luxe White Linen Oxford Shirt", "price": 129,
             "category": "shirt", "collection": "new", "size": "regular",
             "image": "https://picsum.photos/seed/shirt919/400/500"},
            {"id": 2, "name": "Classic Black Silk Slim Fit Shirt", "price": 189,
             "category": "shirt", "collection": "old", "size": "big",
             "badge": "Vintage Edition",
             "image": "https://picsum.photos/seed/shirt838/400/500"}
        ]))
        .into_response(),
        FailMode::ServerError => StatusCode::INTERNAL_SERVER_ERROR.into(),
        FailMode::Garbage => "<html>maintenance</html>".into_response(),
    }
}

#[handler]
fn orders(Data(mode): Data<&FailMode>, Json(body): Json<Value>) -> Response {
    match mode {
        FailMode::None => {
            let order = json!({
                "id": "order-1",
                "amount": body["amount"],
                "status": body["status"],
                "createdAt": "2024-06-01T12:00:00Z"
            });
            (StatusCode::CREATED, Json(order)).into_response()
        }
        FailMode::ServerError => StatusCode::INTERNAL_SERVER_ERROR.into(),
        FailMode::Garbage => (StatusCode::CREATED, "ok").into_response(),
    }
}

/// Starts the stand-in service on an ephemeral port and returns its base URL.
pub async fn spawn(mode: FailMode) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let acceptor = TcpAcceptor::from_tokio(listener).unwrap();
    let addr = acceptor.local_addr()[0].as_socket_addr().cloned().unwrap();
    let app = Route::new()
        .at("/api/products", get(products))
        .at("/api/orders", post(orders))
        .data(mode);
    tokio::spawn(Server::new_with_acceptor(acceptor).run(app));
    format!("http://{}", addr)
}
