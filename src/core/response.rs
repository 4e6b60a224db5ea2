//! Success envelope shared by every endpoint

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::borrow::Cow;

/// Successful response wrapper
///
/// Serializes as `{ "success": true, "data": ..., "message": "..." }`.
/// A `data` of type `()` serializes as `null`, which is what delete
/// endpoints return.
///
/// # Example
/// ```rust,ignore
/// pub async fn get_item(...) -> Result<ApiResponse<MenuItem>, CafeError> {
///     Ok(ApiResponse::ok(service.get_by_id(id).await?))
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip)]
    status: StatusCode,
    pub success: bool,
    pub data: T,
    pub message: Cow<'static, str>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with the default `OK` message
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            success: true,
            data,
            message: Cow::Borrowed("OK"),
        }
    }

    /// 201 for freshly created records
    pub fn created(data: T, message: &'static str) -> Self {
        Self {
            status: StatusCode::CREATED,
            success: true,
            data,
            message: Cow::Borrowed(message),
        }
    }

    /// Replace the message
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
