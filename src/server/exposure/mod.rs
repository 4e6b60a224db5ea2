//! API exposure modules
//!
//! Each exposure consumes an `AppContext` and produces a Router for its protocol.

pub mod rest;

pub use rest::RestExposure;
