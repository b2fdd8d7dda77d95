//! API error types with IntoResponse
//!
//! Every error becomes `{"error": "<message>"}` with a matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// `{id}` is not a non-negative integer (400)
    InvalidFestivalId,

    /// `{performance_id}` is not a non-negative integer (400)
    InvalidPerformanceId,

    /// Body is not JSON of the expected shape (400)
    InvalidPayload,

    /// Body decoded but failed validation (400)
    Validation(ValidationError),

    /// No matching row (404)
    NotFound { resource: &'static str },

    /// Any other store failure (500, logged, text exposed)
    Storage(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidFestivalId
            | Self::InvalidPerformanceId
            | Self::InvalidPayload
            | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::InvalidFestivalId => "Invalid festival ID".to_owned(),
            Self::InvalidPerformanceId => "Invalid performance ID".to_owned(),
            Self::InvalidPayload => "Invalid request payload".to_owned(),
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::Storage(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Storage(e) = &self {
            tracing::error!("Database error: {}", e);
        }

        let body = json!({ "error": self.message() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            _ => Self::Storage(e),
        }
    }
}
