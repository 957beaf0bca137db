//! Customer and seller handlers.

use crate::error::{AppError, ErrorBody};
use crate::extractors::ApiJson;
use crate::models::{CustomerCreate, CustomerSummary, SellerCreate, SellerRow};
use crate::response::{acknowledged, ok, StatusAck};
use crate::service::{CustomerService, SellerService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    post,
    path = "/customers",
    request_body = CustomerCreate,
    responses(
        (status = 200, description = "Customer created", body = StatusAck),
        (status = 409, description = "Duplicate middle name, telephone or email", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody)
    ),
    tag = "customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CustomerCreate>,
) -> Result<impl IntoResponse, AppError> {
    CustomerService::create(&state.pool, &body).await?;
    Ok(acknowledged("customer created"))
}

#[utoipa::path(
    get,
    path = "/customers",
    responses((status = 200, description = "All customers", body = [CustomerSummary])),
    tag = "customers"
)]
pub async fn list_customers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CustomerService::list(&state.pool).await?;
    Ok(ok(rows))
}

#[utoipa::path(
    post,
    path = "/sellers",
    request_body = SellerCreate,
    responses(
        (status = 200, description = "Seller created", body = StatusAck),
        (status = 409, description = "Duplicate phone", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody)
    ),
    tag = "sellers"
)]
pub async fn create_seller(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SellerCreate>,
) -> Result<impl IntoResponse, AppError> {
    SellerService::create(&state.pool, &body).await?;
    Ok(acknowledged("seller created"))
}

#[utoipa::path(
    get,
    path = "/sellers",
    responses((status = 200, description = "All sellers", body = [SellerRow])),
    tag = "sellers"
)]
pub async fn list_sellers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = SellerService::list(&state.pool).await?;
    Ok(ok(rows))
}
