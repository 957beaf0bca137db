//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("config load: {0}")]
    Load(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(sqlx::Error),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Classify a storage failure for `entity`. Constraint violations become client errors;
    /// everything else stays a database error.
    pub fn storage(err: sqlx::Error, entity: &str) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound(entity.to_string()),
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation => AppError::Conflict(format!("{} already exists", entity)),
                ErrorKind::ForeignKeyViolation => {
                    AppError::NotFound(format!("record referenced by {}", entity))
                }
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                    AppError::Validation(format!("{} violates a constraint", entity))
                }
                _ => AppError::Db(sqlx::Error::Database(db)),
            },
            other => AppError::Db(other),
        }
    }

    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::storage(err, "record")
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound("order 7".into());
        assert_eq!(err.status(), (StatusCode::NOT_FOUND, "not_found"));
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = AppError::Conflict("customer already exists".into());
        assert_eq!(err.status().0, StatusCode::CONFLICT);
    }

    #[test]
    fn validation_maps_to_422() {
        let err = AppError::Validation("quantity must be greater than 0".into());
        assert_eq!(err.status().0, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn row_not_found_is_classified_as_not_found() {
        let err = AppError::storage(sqlx::Error::RowNotFound, "computer");
        assert!(matches!(err, AppError::NotFound(ref what) if what == "computer"));
    }

    #[test]
    fn pool_failures_stay_database_errors() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status(), (StatusCode::INTERNAL_SERVER_ERROR, "database_error"));
    }

    #[test]
    fn error_body_carries_code_and_message() {
        let body = ErrorBody {
            error: ErrorDetail {
                code: "conflict".into(),
                message: "conflict: seller already exists".into(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["code"], "conflict");
        assert_eq!(json["error"]["message"], "conflict: seller already exists");
    }
}
