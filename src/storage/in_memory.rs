//! In-memory implementation of DataService for testing and development

use crate::core::{DataService, Entity};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory data service implementation
///
/// Records are kept in insertion order, so two records created within the
/// same clock tick still list newest first. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryDataService<T> {
    records: Arc<RwLock<IndexMap<Uuid, T>>>,
}

impl<T> InMemoryDataService<T> {
    /// Create a new, empty in-memory data service
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl<T> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, entity: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records.insert(entity.id(), entity.clone());

        Ok(entity)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        // Reverse insertion order first; the stable sort keeps it for equal timestamps
        let mut all: Vec<T> = records.values().rev().cloned().collect();
        all.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(all)
    }

    async fn update(&self, id: &Uuid, entity: T) -> Result<Option<T>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        match records.get_mut(id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(Some(entity))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &Uuid) -> Result<Option<T>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(records.shift_remove(id))
    }
}
