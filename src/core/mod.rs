//! Core module containing the fundamental traits and types shared by every entity

pub mod entity;
pub mod error;
pub mod extractors;
pub mod nullable;
pub mod response;
pub mod service;
pub mod validation;

pub use entity::Entity;
pub use error::{CafeError, ErrorResponse, FieldError};
pub use extractors::{EntityId, Payload};
pub use response::ApiResponse;
pub use service::DataService;
