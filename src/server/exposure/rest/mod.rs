//! REST API exposure
//!
//! Turns an [`AppContext`] into an Axum `Router`: entity CRUD routes, the
//! root and health routes, an enveloped 404 fallback, and the tower layers
//! for tracing, CORS and panic recovery.

use crate::core::CafeError;
use crate::server::context::AppContext;
use anyhow::{Result, anyhow};
use axum::http::{HeaderValue, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use chrono::Utc;
use serde_json::{Value, json};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;

/// Plain-text body of `GET /`
pub const ROOT_MESSAGE: &str = "Cafe Manager API is running";

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a context
    ///
    /// # Arguments
    ///
    /// * `context` - Stores, configuration and entity registry
    /// * `custom_routes` - Additional custom routes to merge
    ///
    /// # Errors
    ///
    /// Fails when the configured CORS origin is not a valid header value.
    pub fn build_router(context: Arc<AppContext>, custom_routes: Vec<Router>) -> Result<Router> {
        let cors = Self::cors_layer(&context.config.server.cors_origin)?;

        let mut app = Self::health_routes().merge(context.entity_registry.build_routes());

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app
            .fallback(Self::not_found)
            .layer(CatchPanicLayer::custom(Self::panic_response))
            .layer(cors)
            .layer(TraceLayer::new_for_http()))
    }

    /// Root banner and health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/", get(Self::root))
            .route("/health", get(Self::health_check))
    }

    async fn root() -> &'static str {
        ROOT_MESSAGE
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "timestamp": Utc::now(),
        }))
    }

    async fn not_found(uri: Uri) -> CafeError {
        CafeError::NotFound {
            entity: "Route",
            id: uri.path().to_string(),
        }
    }

    /// `*` allows any origin, anything else must be a single exact origin
    fn cors_layer(origin: &str) -> Result<CorsLayer> {
        let layer = CorsLayer::new().allow_methods(cors::Any).allow_headers(cors::Any);

        if origin.trim() == "*" {
            return Ok(layer.allow_origin(cors::Any));
        }

        let value = HeaderValue::from_str(origin.trim())
            .map_err(|e| anyhow!("Invalid CORS origin '{}': {}", origin, e))?;
        Ok(layer.allow_origin(value))
    }

    fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
        let message = if let Some(s) = panic.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Internal server error".to_string()
        };

        CafeError::Internal(message).into_response()
    }
}
