//! Provider envelope normalization
//!
//! Each function maps one raw provider reply onto one contract shape. They
//! are pure: no I/O, no state.

use serde_json::Value;
use vgw_core::{DoorEntry, EnergyKind, EnergyLevel, GatewayError, GatewayResult, VehicleInfo};

use crate::envelope::{data_section, EnergyData, SecurityStatusData, VehicleInfoData, Wrapped};

/// Vehicle info reply to `{vin, color, doorCount, driveTrain}`
pub fn vehicle_info(reply: Value) -> GatewayResult<VehicleInfo> {
    let data: VehicleInfoData = data_section(reply)?;

    Ok(VehicleInfo {
        vin: data.vin.value,
        color: data.color.value,
        door_count: VehicleInfo::door_count_for(data.four_door_sedan.is_true()),
        drive_train: data.drive_train.value,
    })
}

/// Security status reply to the door list, in provider order
pub fn doors(reply: Value) -> GatewayResult<Vec<DoorEntry>> {
    let data: SecurityStatusData = data_section(reply)?;

    Ok(data
        .doors
        .values
        .into_iter()
        .map(|door| DoorEntry {
            locked: door.locked.is_true(),
            location: door.location.value,
        })
        .collect())
}

/// Energy reply to the level of the requested kind.
///
/// The provider sends both levels in one reply; the one not asked for is
/// ignored, even when it is missing.
pub fn energy_level(reply: Value, kind: EnergyKind) -> GatewayResult<EnergyLevel> {
    let data: EnergyData = data_section(reply)?;

    let (field, level): (&str, Option<Wrapped>) = match kind {
        EnergyKind::Fuel => ("tankLevel", data.tank_level),
        EnergyKind::Battery => ("batteryLevel", data.battery_level),
    };
    let level = level.ok_or_else(|| GatewayError::schema(format!("missing field `{}`", field)))?;

    if level.is_not_applicable() {
        return Err(GatewayError::UnsupportedEnergy(kind));
    }

    Ok(EnergyLevel::new(level.value))
}
