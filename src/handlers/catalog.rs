//! Configuration and computer handlers.

use crate::error::{AppError, ErrorBody};
use crate::extractors::ApiJson;
use crate::models::{ComputerCreate, ComputerListing, ConfigurationCreate, ConfigurationCreated, ConfigurationRow};
use crate::response::{acknowledged, ok, StatusAck};
use crate::service::{ComputerService, ConfigurationService};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    post,
    path = "/configurations",
    request_body = ConfigurationCreate,
    responses(
        (status = 200, description = "Configuration created", body = ConfigurationCreated),
        (status = 422, description = "Invalid payload", body = ErrorBody)
    ),
    tag = "configurations"
)]
pub async fn create_configuration(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ConfigurationCreate>,
) -> Result<impl IntoResponse, AppError> {
    let configuration_id = ConfigurationService::create(&state.pool, &body).await?;
    Ok(ok(ConfigurationCreated { configuration_id }))
}

#[utoipa::path(
    get,
    path = "/configurations",
    responses((status = 200, description = "All configurations", body = [ConfigurationRow])),
    tag = "configurations"
)]
pub async fn list_configurations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = ConfigurationService::list(&state.pool).await?;
    Ok(ok(rows))
}

#[utoipa::path(
    post,
    path = "/computers",
    request_body = ComputerCreate,
    responses(
        (status = 200, description = "Computer added", body = StatusAck),
        (status = 404, description = "Configuration does not exist", body = ErrorBody),
        (status = 422, description = "Invalid payload", body = ErrorBody)
    ),
    tag = "computers"
)]
pub async fn create_computer(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ComputerCreate>,
) -> Result<impl IntoResponse, AppError> {
    ComputerService::create(&state.pool, &body).await?;
    Ok(acknowledged("computer added"))
}

#[utoipa::path(
    get,
    path = "/computers",
    responses((status = 200, description = "All computers with their configuration", body = [ComputerListing])),
    tag = "computers"
)]
pub async fn list_computers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = ComputerService::list(&state.pool).await?;
    Ok(ok(rows))
}
