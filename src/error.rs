//! Unified error types for the API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Fatal startup errors. Any of these terminates the process with a
/// non-zero exit before the listener accepts traffic.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error (listener bind, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-scope errors returned to clients as structured JSON.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The requested resource does not exist.
    #[error("{resource} {id} not found")]
    NotFound {
        /// Resource kind, e.g. "employee".
        resource: &'static str,
        /// Identifier that was looked up.
        id: u32,
    },

    /// A resource with the same identifier already exists.
    #[error("{resource} {id} already exists")]
    Conflict {
        /// Resource kind.
        resource: &'static str,
        /// Conflicting identifier.
        id: u32,
    },

    /// Request input failed validation.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Structured error body returned for every 4xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of what went wrong.
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
