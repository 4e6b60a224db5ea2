//! Menu item entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod service;

pub use descriptor::MenuItemDescriptor;
pub use handlers::*;
pub use model::{Category, MenuItem, MenuItemPatch, NewMenuItem};
pub use service::MenuItemService;
