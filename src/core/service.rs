//! Storage trait for entity records

use crate::core::Entity;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for persisting entities
///
/// Implementations provide single-document CRUD for a specific entity type.
/// The services above are agnostic to the underlying storage mechanism.
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Insert a new entity and return the stored version
    async fn create(&self, entity: T) -> Result<T>;

    /// Get an entity by ID
    async fn get(&self, id: &Uuid) -> Result<Option<T>>;

    /// List all entities, newest first by creation time
    async fn list(&self) -> Result<Vec<T>>;

    /// Replace an existing entity
    ///
    /// Returns `Ok(None)` when no entity has this ID.
    async fn update(&self, id: &Uuid, entity: T) -> Result<Option<T>>;

    /// Delete an entity, returning the removed record
    ///
    /// Returns `Ok(None)` when no entity has this ID.
    async fn delete(&self, id: &Uuid) -> Result<Option<T>>;
}
