//! # Cafe Manager
//!
//! REST backend for a small café point of sale. It manages two kinds of
//! records, menu items and customer orders, stored in a document database.
//!
//! ## Features
//!
//! - **Menu items**: name, category, price, availability and description
//! - **Orders**: customer name, a snapshot of ordered line items, a total
//!   computed on the server, and a status lifecycle
//! - **Uniform envelope**: every endpoint answers `{ success, data | error, message }`
//! - **Pluggable storage**: in-memory by default, MongoDB behind the
//!   `mongodb_backend` feature
//! - **Automatic timestamps**: `createdAt` and `updatedAt` managed by the services
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cafe::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_in_memory_storage()
//!         .serve("0.0.0.0:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::Entity,
        error::{CafeError, ErrorResponse, FieldError},
        extractors::{EntityId, Payload},
        response::ApiResponse,
        service::DataService,
    };

    // === Entities ===
    pub use crate::entities::{
        menu_item::{Category, MenuItem, MenuItemPatch, MenuItemService, NewMenuItem},
        order::{
            LineItem, NewOrder, Order, OrderPatch, OrderService, OrderStatus, StatusPolicy,
            order_total,
        },
    };

    // === Storage ===
    pub use crate::storage::InMemoryDataService;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoDataService;

    // === Config ===
    pub use crate::config::{
        AppConfig, DatabaseBackend, DatabaseConfig, OrdersConfig, ServerConfig,
    };

    // === Server ===
    pub use crate::server::{
        AppContext, EntityDescriptor, EntityRegistry, RestExposure, ServerBuilder,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
