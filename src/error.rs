use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0} already exists")]
    Conflict(&'static str),
    #[error("{0}")]
    Internal(String),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<time::error::Format> for ApiError {
    fn from(err: time::error::Format) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// True when the database rejected a write over a UNIQUE constraint.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Absent rows and duplicate inserts keep a 200; the body key
        // ("error" vs "message") carries the outcome. Only real failures
        // map to 500. Changing the not-found status later happens here.
        let (status, body) = match &self {
            ApiError::NotFound(_) => (StatusCode::OK, json!({ "error": self.to_string() })),
            ApiError::Conflict(_) => (StatusCode::OK, json!({ "message": self.to_string() })),
            ApiError::Internal(detail) => {
                error!(error = %detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": self.to_string() }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
