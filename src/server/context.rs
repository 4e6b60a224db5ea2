//! Application context shared by every route
//!
//! `AppContext` carries the configuration, one store handle per entity type
//! and the registry of entity routes. It is built once by the
//! [`ServerBuilder`](super::ServerBuilder) and handed to the REST exposure;
//! nothing is kept in global state.

use crate::config::AppConfig;
use crate::core::DataService;
use crate::entities::{
    MenuItem, MenuItemDescriptor, MenuItemService, Order, OrderDescriptor, OrderService,
};
use crate::server::entity_registry::EntityRegistry;
use std::sync::Arc;

/// Everything the HTTP layer needs to serve requests
pub struct AppContext {
    /// Effective configuration after file and environment overrides
    pub config: Arc<AppConfig>,

    pub menu_items: Arc<dyn DataService<MenuItem>>,

    pub orders: Arc<dyn DataService<Order>>,

    /// CRUD routes for menu items and orders
    pub entity_registry: EntityRegistry,
}

impl AppContext {
    /// Build the context and register the entity routes
    pub fn from_builder_components(
        config: AppConfig,
        menu_items: Arc<dyn DataService<MenuItem>>,
        orders: Arc<dyn DataService<Order>>,
    ) -> Self {
        let mut context = Self {
            config: Arc::new(config),
            menu_items,
            orders,
            entity_registry: EntityRegistry::new(),
        };

        let menu_descriptor = MenuItemDescriptor::new(context.menu_item_service());
        let order_descriptor = OrderDescriptor::new(context.order_service());
        context.entity_registry.register(Box::new(menu_descriptor));
        context.entity_registry.register(Box::new(order_descriptor));

        context
    }

    pub fn menu_item_service(&self) -> MenuItemService {
        MenuItemService::new(self.menu_items.clone())
    }

    /// Order service using the configured status policy
    pub fn order_service(&self) -> OrderService {
        OrderService::new(self.orders.clone())
            .with_status_policy(self.config.orders.status_policy)
    }
}
