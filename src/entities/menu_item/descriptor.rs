//! Entity descriptor for MenuItem

use super::{
    MenuItemService, create_menu_item, delete_menu_item, get_menu_item,
    handlers::MenuItemAppState, list_menu_items, update_menu_item,
};
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the MenuItem entity
pub struct MenuItemDescriptor {
    pub service: MenuItemService,
}

impl MenuItemDescriptor {
    pub fn new(service: MenuItemService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for MenuItemDescriptor {
    fn entity_type(&self) -> &str {
        "menu-item"
    }

    fn plural(&self) -> &str {
        "menu-items"
    }

    fn build_routes(&self) -> Router {
        let state = MenuItemAppState {
            service: self.service.clone(),
        };

        Router::new()
            .route(
                "/api/menu-items",
                get(list_menu_items).post(create_menu_item),
            )
            .route(
                "/api/menu-items/{id}",
                get(get_menu_item)
                    .put(update_menu_item)
                    .delete(delete_menu_item),
            )
            .with_state(state)
    }
}
