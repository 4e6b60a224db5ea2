//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that wires:
//! - the storage backend for menu items and orders
//! - CRUD routes for both entities
//! - root, health and fallback routes with tracing, CORS and panic recovery

pub mod builder;
pub mod context;
pub mod entity_registry;
pub mod exposure;

pub use builder::ServerBuilder;
pub use context::AppContext;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::RestExposure;
