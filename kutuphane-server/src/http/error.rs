//! API error type with IntoResponse
//!
//! Every failure, whatever its layer, becomes HTTP 500 with
//! `{ "error": "<message>" }`. Callers see no distinction between
//! validation, constraint and connectivity failures; the log does.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Payload or path parameter rejected before touching the store
    Validation(ValidationError),

    /// Any error reported by the repository layer
    Database(DbError),
}

impl ApiError {
    /// Status used for every error response.
    pub const STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Database(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation(e) => tracing::warn!("Validation error: {}", e),
            Self::Database(DbError::NotFound { resource, id }) => {
                tracing::warn!(resource = *resource, id = %id, "Not found")
            }
            Self::Database(e) => tracing::error!("Database error: {}", e),
        }

        let body = json!({ "error": self.message() });
        (Self::STATUS, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
