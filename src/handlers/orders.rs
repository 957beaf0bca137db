//! Order handlers: open an order, append items, fetch with lines.

use super::parse_id;
use crate::error::{AppError, ErrorBody};
use crate::extractors::ApiJson;
use crate::models::{OrderCreate, OrderCreated, OrderItemCreate, OrderView};
use crate::response::{acknowledged, ok, StatusAck};
use crate::service::{OrderService, Validate};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderCreate,
    responses(
        (status = 200, description = "Empty order opened", body = OrderCreated),
        (status = 404, description = "Customer or seller does not exist", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody)
    ),
    tag = "orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<OrderCreate>,
) -> Result<impl IntoResponse, AppError> {
    let order_id = OrderService::create(&state.pool, &body).await?;
    Ok(ok(OrderCreated { order_id }))
}

#[utoipa::path(
    post,
    path = "/orders/{order_id}/items",
    params(("order_id" = i64, Path, description = "Order id")),
    request_body = OrderItemCreate,
    responses(
        (status = 200, description = "Item added and total recomputed", body = StatusAck),
        (status = 404, description = "Order or computer does not exist", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody)
    ),
    tag = "orders"
)]
pub async fn add_order_item(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    ApiJson(body): ApiJson<OrderItemCreate>,
) -> Result<impl IntoResponse, AppError> {
    let order_id = parse_id(&order_id)?;
    body.validate()?;
    OrderService::add_item(&state.pool, order_id, &body).await?;
    Ok(acknowledged("item added"))
}

#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(("order_id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order header with its items", body = OrderView),
        (status = 404, description = "Order does not exist", body = ErrorBody)
    ),
    tag = "orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let order_id = parse_id(&order_id)?;
    let view = OrderService::get(&state.pool, order_id).await?;
    Ok(ok(view))
}
