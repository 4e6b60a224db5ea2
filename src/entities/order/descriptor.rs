//! Entity descriptor for Order

use super::{
    OrderService, create_order, delete_order, get_order, handlers::OrderAppState, list_orders,
    update_order,
};
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub service: OrderService,
}

impl OrderDescriptor {
    pub fn new(service: OrderService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        "orders"
    }

    fn build_routes(&self) -> Router {
        let state = OrderAppState {
            service: self.service.clone(),
        };

        Router::new()
            .route("/api/orders", get(list_orders).post(create_order))
            .route(
                "/api/orders/{id}",
                get(get_order).put(update_order).delete(delete_order),
            )
            .with_state(state)
    }
}
