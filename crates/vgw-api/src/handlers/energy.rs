//! Fuel and battery level handlers

use axum::extract::{Path, State};
use axum::Json;
use vgw_core::routing::vehicle_id_from_path;
use vgw_core::{EnergyKind, EnergyLevel};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /vehicles/:vehicle_id/fuel
pub async fn get_fuel(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<EnergyLevel>, ApiError> {
    read_energy(&state, &vehicle_id, EnergyKind::Fuel).await
}

/// GET /vehicles/:vehicle_id/battery
pub async fn get_battery(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<EnergyLevel>, ApiError> {
    read_energy(&state, &vehicle_id, EnergyKind::Battery).await
}

async fn read_energy(
    state: &AppState,
    vehicle_id: &str,
    kind: EnergyKind,
) -> Result<Json<EnergyLevel>, ApiError> {
    let level = state
        .backend()
        .energy(vehicle_id_from_path(vehicle_id), kind)
        .await?;
    Ok(Json(level))
}
