//! HTTP handlers for Orders API

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        InternalServerErrorResponse, ServiceUnavailableResponse, UnprocessableEntityResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::OrderResult;
use crate::models::{Order, OrderCreated, OrderItem};
use crate::repository::OrderRepository;
use crate::service::OrderService;

/// OpenAPI documentation for Orders API
#[derive(OpenApi)]
#[openapi(
    paths(create_order),
    components(
        schemas(Order, OrderItem, OrderCreated),
        responses(
            UnprocessableEntityResponse,
            ServiceUnavailableResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Orders", description = "Checkout submissions")
    )
)]
pub struct ApiDoc;

/// Create the orders router: `POST /orders`.
pub fn router<R: OrderRepository + 'static>(service: OrderService<R>) -> Router {
    Router::new()
        .route("/orders", post(create_order::<R>))
        .with_state(Arc::new(service))
}

/// Submit an order
#[utoipa::path(
    post,
    path = "/orders",
    tag = "Orders",
    request_body = Order,
    responses(
        (status = 201, description = "Order stored", body = OrderCreated),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    ValidatedJson(order): ValidatedJson<Order>,
) -> OrderResult<(StatusCode, Json<OrderCreated>)> {
    let created = service.place_order(order).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
