//! vgw-core - Core traits and types for the vehicle gateway
//!
//! This crate holds the response contract every backend must produce, the
//! validated command vocabulary, and the `VehicleBackend` trait the HTTP
//! layer is written against.

pub mod backend;
pub mod error;
pub mod models;
pub mod routing;

pub use backend::VehicleBackend;
pub use error::{GatewayError, GatewayResult};
pub use models::*;
