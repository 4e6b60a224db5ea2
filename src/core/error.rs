//! Typed error handling for the café services
//!
//! Every service operation returns [`CafeError`] on failure. The HTTP boundary
//! turns it into the uniform error envelope:
//!
//! ```json
//! { "success": false, "error": { "code": "NOT_FOUND", "message": "Order not found" } }
//! ```
//!
//! # Error Categories
//!
//! - `Validation`: missing or invalid input (400, `VALIDATION_ERROR`)
//! - `NotFound`: the referenced id does not exist (404, `NOT_FOUND`)
//! - `Storage`: unexpected persistence failure (500, `SERVER_ERROR`)
//! - `Internal`: anything else that went wrong at runtime (500, `INTERNAL_ERROR`)

use crate::core::Entity;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The error type shared by services and HTTP handlers
#[derive(Debug, Error)]
pub enum CafeError {
    /// Missing or invalid request input
    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// No record with the requested id
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// The store failed in an unexpected way
    #[error(transparent)]
    Storage(#[from] anyhow::Error),

    /// Unhandled runtime failure
    #[error("{0}")]
    Internal(String),
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Error body inside the response envelope
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

#[derive(Serialize)]
struct ErrorEnvelope {
    success: bool,
    error: ErrorResponse,
}

impl CafeError {
    /// Validation failure with a single message and no field breakdown
    pub fn validation(message: impl Into<String>) -> Self {
        CafeError::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Not-found failure for an entity type
    pub fn not_found<T: Entity>(id: impl ToString) -> Self {
        CafeError::NotFound {
            entity: T::label(),
            id: id.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CafeError::Validation { .. } => StatusCode::BAD_REQUEST,
            CafeError::NotFound { .. } => StatusCode::NOT_FOUND,
            CafeError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CafeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CafeError::Validation { .. } => "VALIDATION_ERROR",
            CafeError::NotFound { .. } => "NOT_FOUND",
            CafeError::Storage(_) => "SERVER_ERROR",
            CafeError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for CafeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            CafeError::Storage(err) => tracing::error!(error = ?err, "storage failure"),
            CafeError::Internal(msg) => tracing::error!(%msg, "internal error"),
            CafeError::Validation { message, fields } => {
                tracing::debug!(%message, ?fields, "rejected request")
            }
            CafeError::NotFound { entity, id } => tracing::debug!(%entity, %id, "not found"),
        }

        let body = Json(ErrorEnvelope {
            success: false,
            error: self.to_response(),
        });
        (status, body).into_response()
    }
}

/// A specialized Result type for service operations
pub type CafeResult<T> = Result<T, CafeError>;
