//! Entity registry collecting the CRUD routes of every resource

use axum::Router;
use std::collections::BTreeMap;

/// Trait that describes how to build routes for an entity
///
/// Menu items and orders each implement this to provide their CRUD routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "order")
    fn entity_type(&self) -> &str;

    /// The plural form used in URLs (e.g., "orders", "menu-items")
    fn plural(&self) -> &str;

    /// Build the CRUD routes for this entity
    ///
    /// Should return a Router with routes like:
    /// - GET/POST /api/{plural}
    /// - GET/PUT/DELETE /api/{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Registry for all entities in the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// The entity type name is the key; registering it twice replaces the first one.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        tracing::debug!(entity_type = %entity_type, plural = %descriptor.plural(), "registered entity routes");
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Merge all registered entity routes into a single router
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Registered entity types, in name order
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}
