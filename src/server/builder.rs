//! ServerBuilder for fluent API to build HTTP servers

use super::context::AppContext;
use super::exposure::RestExposure;
use crate::config::{AppConfig, DatabaseBackend};
use crate::core::DataService;
use crate::entities::{MenuItem, Order};
use crate::storage::InMemoryDataService;
use anyhow::{Result, anyhow};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the café HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(AppConfig::load()?)
///     .with_configured_storage()
///     .await?
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    menu_items: Option<Arc<dyn DataService<MenuItem>>>,
    orders: Option<Arc<dyn DataService<Order>>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            menu_items: None,
            orders: None,
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the menu item store (required)
    pub fn with_menu_item_store(mut self, store: impl DataService<MenuItem> + 'static) -> Self {
        self.menu_items = Some(Arc::new(store));
        self
    }

    /// Set the order store (required)
    pub fn with_order_store(mut self, store: impl DataService<Order> + 'static) -> Self {
        self.orders = Some(Arc::new(store));
        self
    }

    /// Use fresh in-memory stores for both entity types
    pub fn with_in_memory_storage(self) -> Self {
        self.with_menu_item_store(InMemoryDataService::<MenuItem>::new())
            .with_order_store(InMemoryDataService::<Order>::new())
    }

    /// Set up the stores selected by `database.backend`
    ///
    /// For MongoDB this connects and pings the server first, so an
    /// unreachable database fails startup instead of the first request.
    pub async fn with_configured_storage(self) -> Result<Self> {
        match self.config.database.backend {
            DatabaseBackend::InMemory => {
                tracing::info!("using in-memory storage");
                Ok(self.with_in_memory_storage())
            }
            DatabaseBackend::Mongodb => self.with_mongodb_storage().await,
        }
    }

    #[cfg(feature = "mongodb_backend")]
    async fn with_mongodb_storage(self) -> Result<Self> {
        use crate::storage::MongoDataService;
        use anyhow::Context;
        use mongodb::bson::doc;

        let client = mongodb::Client::with_uri_str(&self.config.database.uri)
            .await
            .context("Invalid MongoDB connection string")?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(&self.config.database.name));

        database
            .run_command(doc! { "ping": 1 })
            .await
            .context("Failed to reach MongoDB")?;
        tracing::info!(database = %database.name(), "connected to MongoDB");

        Ok(self
            .with_menu_item_store(MongoDataService::<MenuItem>::new(database.clone()))
            .with_order_store(MongoDataService::<Order>::new(database)))
    }

    #[cfg(not(feature = "mongodb_backend"))]
    async fn with_mongodb_storage(self) -> Result<Self> {
        Err(anyhow!(
            "database.backend is 'mongodb' but the server was built without the mongodb_backend feature"
        ))
    }

    /// Add custom routes to the server
    ///
    /// They are merged after the entity routes and share the same layers.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the shared application context
    pub fn build_context(mut self) -> Result<AppContext> {
        let menu_items = self.menu_items.take().ok_or_else(|| {
            anyhow!("Menu item store is required. Call .with_menu_item_store() or .with_in_memory_storage()")
        })?;
        let orders = self.orders.take().ok_or_else(|| {
            anyhow!("Order store is required. Call .with_order_store() or .with_in_memory_storage()")
        })?;

        Ok(AppContext::from_builder_components(
            self.config,
            menu_items,
            orders,
        ))
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let context = Arc::new(self.build_context()?);
        RestExposure::build_router(context, custom_routes)
    }

    /// Serve on `server.host:server.port` from the configuration
    pub async fn serve_configured(self) -> Result<()> {
        let addr = self.config.server.address();
        self.serve(&addr).await
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}


/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
