//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoDataService<T>` backed by a `mongodb::Database`.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag:
//! ```toml
//! [dependencies]
//! cafe-manager = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Storage model
//!
//! Each `MongoDataService<T>` operates on a collection named after
//! `T::resource_name()`: `menuitems` for menu items and `orders` for orders.
//!
//! # Serialization strategy
//!
//! Entities are serialized via `serde_json::Value` as an intermediate format,
//! then converted to BSON documents. UUIDs are stored as strings in `_id`.
//! `createdAt` and `updatedAt` are stored as BSON dates so that sorting on
//! them is chronological; they are turned back into RFC 3339 strings on read.

use crate::core::{DataService, Entity};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{self, Bson, Document, doc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Timestamp fields stored as native BSON dates
const DATE_FIELDS: [&str; 2] = ["createdAt", "updatedAt"];

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Convert a serde_json::Value (expected to be an Object) into a BSON Document,
/// renaming `id` → `_id` and storing timestamps as BSON dates.
fn json_to_document(json: serde_json::Value) -> Result<Document> {
    let bson_val =
        bson::to_bson(&json).map_err(|e| anyhow!("Failed to convert JSON to BSON: {}", e))?;

    let mut doc = match bson_val {
        Bson::Document(d) => d,
        _ => return Err(anyhow!("Expected BSON document, got non-object")),
    };

    if let Some(id) = doc.remove("id") {
        doc.insert("_id", id);
    }

    for field in DATE_FIELDS {
        if let Some(Bson::String(raw)) = doc.get(field) {
            let date = bson::DateTime::parse_rfc3339_str(raw)
                .map_err(|e| anyhow!("Invalid timestamp in '{}': {}", field, e))?;
            doc.insert(field, Bson::DateTime(date));
        }
    }

    Ok(doc)
}

/// Convert a BSON Document back into a serde_json::Value,
/// renaming `_id` → `id` and rendering BSON dates as RFC 3339 strings.
fn document_to_json(mut doc: Document) -> Result<serde_json::Value> {
    if let Some(id) = doc.remove("_id") {
        doc.insert("id", id);
    }

    for field in DATE_FIELDS {
        if let Some(Bson::DateTime(date)) = doc.get(field) {
            let rendered = date
                .try_to_rfc3339_string()
                .map_err(|e| anyhow!("Invalid date in '{}': {}", field, e))?;
            doc.insert(field, Bson::String(rendered));
        }
    }

    Ok(Bson::Document(doc).into_relaxed_extjson())
}

/// Convert a UUID to its BSON string representation for queries.
fn uuid_bson(id: &Uuid) -> Bson {
    Bson::String(id.to_string())
}

// ---------------------------------------------------------------------------
// MongoDataService<T>
// ---------------------------------------------------------------------------

/// Generic data storage service backed by MongoDB.
///
/// # Example
///
/// ```rust,ignore
/// use mongodb::Client;
/// use cafe::prelude::*;
///
/// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
/// let db = client.database("cafedb");
/// let menu = MongoDataService::<MenuItem>::new(db);
/// let latte = menu.create(latte).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoDataService<T> {
    database: Database,
    _marker: std::marker::PhantomData<T>,
}

impl<T> MongoDataService<T> {
    /// Create a new `MongoDataService` with the given database handle.
    pub fn new(database: Database) -> Self {
        Self {
            database,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }
}

impl<T: Entity + Serialize + DeserializeOwned> MongoDataService<T> {
    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(T::resource_name())
    }

    fn entity_to_document(entity: &T) -> Result<Document> {
        let json = serde_json::to_value(entity)
            .map_err(|e| anyhow!("Failed to serialize entity: {}", e))?;
        json_to_document(json)
    }

    fn document_to_entity(doc: Document) -> Result<T> {
        let json = document_to_json(doc)?;
        serde_json::from_value(json)
            .map_err(|e| anyhow!("Failed to deserialize entity from document: {}", e))
    }

    async fn find_by_id(&self, id_bson: Bson) -> Result<Option<T>> {
        let doc = self
            .collection()
            .find_one(doc! { "_id": id_bson })
            .await
            .map_err(|e| anyhow!("Failed to get {}: {}", T::resource_name(), e))?;

        doc.map(Self::document_to_entity).transpose()
    }
}

#[async_trait]
impl<T: Entity + Serialize + DeserializeOwned> DataService<T> for MongoDataService<T> {
    /// Inserts the document and reads it back to return the stored version.
    async fn create(&self, entity: T) -> Result<T> {
        let doc = Self::entity_to_document(&entity)?;

        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| anyhow!("Failed to create {}: {}", T::resource_name(), e))?;

        self.find_by_id(uuid_bson(&entity.id()))
            .await?
            .ok_or_else(|| anyhow!("Entity not found after insert"))
    }

    async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        self.find_by_id(uuid_bson(id)).await
    }

    /// List all entities, newest first.
    async fn list(&self) -> Result<Vec<T>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await
            .map_err(|e| anyhow!("Failed to list {}: {}", T::resource_name(), e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| anyhow!("Failed to collect {}: {}", T::resource_name(), e))?;

        docs.into_iter().map(Self::document_to_entity).collect()
    }

    /// Replace an existing document.
    ///
    /// Returns `Ok(None)` when no document matched.
    async fn update(&self, id: &Uuid, entity: T) -> Result<Option<T>> {
        let doc = Self::entity_to_document(&entity)?;
        let id_bson = uuid_bson(id);

        let result = self
            .collection()
            .replace_one(doc! { "_id": &id_bson }, doc)
            .await
            .map_err(|e| anyhow!("Failed to update {}: {}", T::resource_name(), e))?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        self.find_by_id(id_bson).await
    }

    /// Delete by UUID, returning the removed entity if there was one.
    async fn delete(&self, id: &Uuid) -> Result<Option<T>> {
        let removed = self
            .collection()
            .find_one_and_delete(doc! { "_id": uuid_bson(id) })
            .await
            .map_err(|e| anyhow!("Failed to delete {}: {}", T::resource_name(), e))?;

        removed.map(Self::document_to_entity).transpose()
    }
}
