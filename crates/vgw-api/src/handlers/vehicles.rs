//! Vehicle info and door handlers

use axum::extract::{Path, State};
use axum::Json;
use vgw_core::routing::vehicle_id_from_path;
use vgw_core::{DoorEntry, VehicleInfo};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /vehicles/:vehicle_id
pub async fn get_vehicle_info(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<VehicleInfo>, ApiError> {
    let info = state
        .backend()
        .vehicle_info(vehicle_id_from_path(&vehicle_id))
        .await?;
    Ok(Json(info))
}

/// GET /vehicles/:vehicle_id/doors
/// Lock state per door, in the provider's order
pub async fn get_doors(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<Vec<DoorEntry>>, ApiError> {
    let doors = state
        .backend()
        .doors(vehicle_id_from_path(&vehicle_id))
        .await?;
    Ok(Json(doors))
}
