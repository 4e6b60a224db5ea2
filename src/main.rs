//! Cafe Manager API server
//!
//! Configuration is read from the YAML file named by `CAFE_CONFIG` (optional)
//! and the `PORT`, `MONGO_URI` and `CORS_ORIGIN` environment variables.
//! Log verbosity follows `RUST_LOG`, `info` by default.

use cafe::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::load()?;
    tracing::info!(
        backend = ?config.database.backend,
        status_policy = ?config.orders.status_policy,
        cors_origin = %config.server.cors_origin,
        "configuration loaded"
    );

    ServerBuilder::new()
        .with_config(config)
        .with_configured_storage()
        .await?
        .serve_configured()
        .await
}
