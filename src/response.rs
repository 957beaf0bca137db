//! Response helpers. Bodies are returned bare (no envelope) so field names and status codes match
//! the public contract: every success, creates included, is `200 OK`.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgment returned by creates that do not echo an id, e.g. `{"status": "seller created"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusAck {
    pub status: String,
}

pub fn acknowledged(status: &str) -> (StatusCode, Json<StatusAck>) {
    ok(StatusAck {
        status: status.to_string(),
    })
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
