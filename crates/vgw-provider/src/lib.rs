//! Telemetry provider integration
//!
//! Talks to the third-party telemetry provider and turns its loosely typed
//! envelopes into the gateway's response contract.
//!
//! # Example
//!
//! ```rust,no_run
//! use vgw_core::{EnergyKind, VehicleBackend};
//! use vgw_provider::{ProviderBackend, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = ProviderBackend::from_config(&ProviderConfig::default())?;
//!
//!     let info = backend.vehicle_info("1234").await?;
//!     let fuel = backend.energy("1234", EnergyKind::Fuel).await?;
//!     println!("{} has {}% fuel", info.vin, fuel.percentage);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module provides an in-memory transport and an HTTP fake of
//! the provider serving canned envelopes:
//!
//! ```rust,ignore
//! use vgw_provider::testing::FakeProvider;
//!
//! let provider = FakeProvider::start().await?;
//! let backend = ProviderBackend::from_config(&provider.config())?;
//! ```

mod backend;
mod client;
mod config;
pub mod engine;
pub mod envelope;
mod error;
pub mod normalize;
pub mod testing;

pub use backend::ProviderBackend;
pub use client::{ProviderClient, ProviderTransport};
pub use config::{ProviderConfig, ServicePaths};
pub use envelope::{ProviderRequest, RequestTemplate};
pub use error::{ProviderError, ProviderResult};
