//! Vehicle description and door models

use serde::{Deserialize, Serialize};

/// Door count reported for vehicles flagged as four-door sedans
pub const SEDAN_DOOR_COUNT: u8 = 4;
/// Door count reported for every other body style
pub const COUPE_DOOR_COUNT: u8 = 2;

/// General information about a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    /// Vehicle identification number
    pub vin: String,
    /// Exterior color
    pub color: String,
    /// Either 2 or 4
    pub door_count: u8,
    /// Drive train description (e.g. "v8", "electric")
    pub drive_train: String,
}

impl VehicleInfo {
    /// Door count for a vehicle, given whether it is a four-door sedan
    pub fn door_count_for(four_door_sedan: bool) -> u8 {
        if four_door_sedan {
            SEDAN_DOOR_COUNT
        } else {
            COUPE_DOOR_COUNT
        }
    }
}

/// Lock state of a single door
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorEntry {
    /// Door position (e.g. "frontLeft")
    pub location: String,
    pub locked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_info_uses_camel_case_keys() {
        let info = VehicleInfo {
            vin: "123123412412".to_string(),
            color: "Metallic Silver".to_string(),
            door_count: VehicleInfo::door_count_for(true),
            drive_train: "v8".to_string(),
        };

        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(
            json,
            r#"{"vin":"123123412412","color":"Metallic Silver","doorCount":4,"driveTrain":"v8"}"#
        );
    }

    #[test]
    fn door_count_is_binary() {
        assert_eq!(VehicleInfo::door_count_for(true), 4);
        assert_eq!(VehicleInfo::door_count_for(false), 2);
    }

    #[test]
    fn door_entry_serializes_native_bool() {
        let door = DoorEntry {
            location: "frontLeft".to_string(),
            locked: true,
        };
        let value = serde_json::to_value(&door).unwrap();
        assert_eq!(value["location"], "frontLeft");
        assert_eq!(value["locked"], serde_json::Value::Bool(true));
    }
}
