//! Café entities
//!
//! Each entity lives in its own module with the same layout:
//! - `model`: the stored record and its request payloads
//! - `service`: validation and CRUD on top of a [`DataService`](crate::core::DataService)
//! - `handlers`: axum handlers wrapping the service in the response envelope
//! - `descriptor`: the [`EntityDescriptor`](crate::server::EntityDescriptor) that mounts the routes

pub mod menu_item;
pub mod order;

pub use menu_item::{MenuItem, MenuItemDescriptor, MenuItemService};
pub use order::{Order, OrderDescriptor, OrderService};
