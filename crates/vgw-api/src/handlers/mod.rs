//! HTTP request handlers for the vehicle API
//!
//! Handlers only extract the request and delegate to the `VehicleBackend`;
//! all translation logic lives behind that trait.

pub mod energy;
pub mod engine;
pub mod vehicles;
