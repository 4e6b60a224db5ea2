//! Order entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod service;
pub mod status;

pub use descriptor::OrderDescriptor;
pub use handlers::*;
pub use model::{LineItem, NewOrder, Order, OrderPatch, order_total};
pub use service::OrderService;
pub use status::{OrderStatus, StatusPolicy};
