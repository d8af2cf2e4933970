//! VehicleBackend trait - the seam between the HTTP layer and a provider

use async_trait::async_trait;

use crate::error::GatewayResult;
use crate::models::{DoorEntry, EnergyKind, EnergyLevel, EngineResult, VehicleInfo};

/// A source of normalized vehicle data.
///
/// Every method takes the vehicle identifier exactly as the caller supplied
/// it. Implementations must not keep per-request state between calls; the
/// HTTP layer invokes them concurrently.
#[async_trait]
pub trait VehicleBackend: Send + Sync {
    /// General vehicle description
    async fn vehicle_info(&self, vehicle_id: &str) -> GatewayResult<VehicleInfo>;

    /// Lock state of every door, in the provider's order
    async fn doors(&self, vehicle_id: &str) -> GatewayResult<Vec<DoorEntry>>;

    /// Fuel or battery level
    async fn energy(&self, vehicle_id: &str, kind: EnergyKind) -> GatewayResult<EnergyLevel>;

    /// Start or stop the engine.
    ///
    /// `action` is the raw caller string; validation is part of the contract.
    async fn engine(&self, vehicle_id: &str, action: &str) -> GatewayResult<EngineResult>;
}
