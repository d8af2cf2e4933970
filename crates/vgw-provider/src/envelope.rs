//! Provider wire format
//!
//! Outbound requests are small JSON objects carrying the vehicle identifier
//! and a response-format marker. Inbound envelopes wrap every leaf value as
//! `{"type": ..., "value": "<string>"}`, lists as `{"values": [...]}`, and
//! signal booleans as the strings `"True"`/`"False"`.
//!
//! ```json
//! {
//!   "service": "getVehicleInfo",
//!   "status": "200",
//!   "data": {
//!     "vin": { "type": "String", "value": "123123412412" },
//!     "fourDoorSedan": { "type": "Boolean", "value": "True" }
//!   }
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use vgw_core::{GatewayError, GatewayResult};

/// Response-format marker sent with every request
pub const DEFAULT_RESPONSE_TYPE: &str = "JSON";

/// Envelope status the provider uses for a successful lookup
pub const STATUS_OK: &str = "200";

/// String the provider uses for a true boolean
pub const TRUE_FLAG: &str = "True";

/// String the provider sends in place of a value that does not apply
pub const NOT_APPLICABLE: &str = "null";

// =============================================================================
// Outbound
// =============================================================================

/// Body of a single provider call.
///
/// Built fresh for every call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRequest {
    pub id: String,
    pub response_type: String,
    /// Engine command (`START_VEHICLE` / `STOP_VEHICLE`), engine calls only
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub command: Option<String>,
}

/// Fixed fields shared by every outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTemplate {
    response_type: String,
}

impl RequestTemplate {
    pub fn new(response_type: impl Into<String>) -> Self {
        Self {
            response_type: response_type.into(),
        }
    }

    pub fn response_type(&self) -> &str {
        &self.response_type
    }

    /// Build the request body for one vehicle lookup
    pub fn for_vehicle(&self, vehicle_id: &str) -> ProviderRequest {
        ProviderRequest {
            id: vehicle_id.to_string(),
            response_type: self.response_type.clone(),
            command: None,
        }
    }

    /// Build the request body for one engine command
    pub fn for_command(&self, vehicle_id: &str, command: &str) -> ProviderRequest {
        ProviderRequest {
            command: Some(command.to_string()),
            ..self.for_vehicle(vehicle_id)
        }
    }
}

impl Default for RequestTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_RESPONSE_TYPE)
    }
}

// =============================================================================
// Inbound
// =============================================================================

/// A single wrapped leaf value
#[derive(Debug, Clone, Deserialize)]
pub struct Wrapped {
    pub value: String,
}

impl Wrapped {
    /// True only for the exact string `"True"`
    pub fn is_true(&self) -> bool {
        self.value == TRUE_FLAG
    }

    /// True when the provider marked the field as not applicable
    pub fn is_not_applicable(&self) -> bool {
        self.value == NOT_APPLICABLE
    }
}

/// A wrapped list
#[derive(Debug, Clone, Deserialize)]
pub struct WrappedList<T> {
    pub values: Vec<T>,
}

/// `data` section of the vehicle info service
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfoData {
    pub vin: Wrapped,
    pub color: Wrapped,
    pub four_door_sedan: Wrapped,
    pub drive_train: Wrapped,
}

/// `data` section of the security status service
#[derive(Debug, Deserialize)]
pub struct SecurityStatusData {
    pub doors: WrappedList<DoorData>,
}

#[derive(Debug, Deserialize)]
pub struct DoorData {
    pub location: Wrapped,
    pub locked: Wrapped,
}

/// `data` section of the energy service.
///
/// Both levels always come back together; only the one asked for has to be
/// present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyData {
    #[serde(default)]
    pub tank_level: Option<Wrapped>,
    #[serde(default)]
    pub battery_level: Option<Wrapped>,
}

/// Top-level fields common to every provider reply
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

/// Pull the typed `data` section out of a provider reply.
///
/// A reply without `data` whose `status` is not `"200"` is reported as a
/// provider rejection (e.g. unknown vehicle); any other missing or mistyped
/// field is a schema error.
pub fn data_section<T: DeserializeOwned>(reply: Value) -> GatewayResult<T> {
    if !reply.is_object() {
        return Err(GatewayError::schema("provider reply is not a JSON object"));
    }
    let envelope: Envelope = serde_json::from_value(reply)
        .map_err(|e| GatewayError::schema(format!("invalid envelope: {}", e)))?;

    let data = match envelope.data {
        Some(data) => data,
        None => {
            return Err(match envelope.status.as_ref().map(status_text) {
                Some(status) if status != STATUS_OK => GatewayError::UpstreamRejected {
                    status,
                    reason: envelope
                        .reason
                        .unwrap_or_else(|| "no reason given".to_string()),
                },
                _ => GatewayError::schema("missing field `data`"),
            })
        }
    };

    serde_json::from_value(data).map_err(|e| GatewayError::schema(e.to_string()))
}

/// Read `actionResult.status` from an engine reply, if it is a string
pub fn action_result_status(reply: &Value) -> Option<&str> {
    reply
        .get("actionResult")
        .and_then(|r| r.get("status"))
        .and_then(Value::as_str)
}

fn status_text(status: &Value) -> String {
    match status {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
