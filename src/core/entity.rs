//! Entity trait defining the core abstraction for persisted records

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for every persisted record.
///
/// All entities have:
/// - id: Unique identifier, generated on creation and never changed
/// - created_at: Creation timestamp
/// - updated_at: Last modification timestamp
///
/// Storage backends rely only on this trait, so a new record type needs no
/// backend-specific code.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The collection name used by document stores (e.g., "menuitems")
    fn resource_name() -> &'static str;

    /// Human-readable label used in messages (e.g., "Menu item")
    fn label() -> &'static str;

    // === Core Entity Fields ===

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;

    /// Mark the entity as modified now
    fn touch(&mut self);
}
