//! Engine command translation
//!
//! Caller actions (`START`, `STOP`) become provider commands
//! (`START_VEHICLE`, `STOP_VEHICLE`); the provider's result code is
//! collapsed into success or error.

use serde_json::Value;
use vgw_core::{EngineAction, EngineResult, GatewayResult};

use crate::envelope::{action_result_status, ProviderRequest, RequestTemplate};

/// Validate a caller action and build the provider request for it.
///
/// Fails with `InvalidAction` for anything but `START`/`STOP`; no request
/// is produced in that case.
pub fn command_request(
    template: &RequestTemplate,
    vehicle_id: &str,
    action: &str,
) -> GatewayResult<(EngineAction, ProviderRequest)> {
    let action: EngineAction = action.parse()?;
    let request = template.for_command(vehicle_id, action.provider_command());
    Ok((action, request))
}

/// Interpret an engine reply. Only `actionResult.status == "EXECUTED"` is a
/// success; any other code, or none at all, is an error.
pub fn interpret_result(reply: &Value) -> EngineResult {
    EngineResult::from_result_code(action_result_status(reply))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vgw_core::{EngineStatus, GatewayError};

    #[test]
    fn start_maps_to_start_vehicle() {
        let (action, request) =
            command_request(&RequestTemplate::default(), "1234", "START").unwrap();
        assert_eq!(action, EngineAction::Start);
        assert_eq!(request.id, "1234");
        assert_eq!(request.command.as_deref(), Some("START_VEHICLE"));
    }

    #[test]
    fn stop_maps_to_stop_vehicle() {
        let (_, request) = command_request(&RequestTemplate::default(), "1235", "STOP").unwrap();
        assert_eq!(request.command.as_deref(), Some("STOP_VEHICLE"));
        assert_eq!(request.response_type, "JSON");
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = command_request(&RequestTemplate::default(), "1234", "start").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidAction(ref a) if a == "start"));
    }

    #[test]
    fn executed_is_success() {
        let reply = json!({ "service": "actionEngine", "status": "200",
            "actionResult": { "status": "EXECUTED" } });
        assert_eq!(interpret_result(&reply).status, EngineStatus::Success);
    }

    #[test]
    fn other_codes_are_error() {
        for reply in [
            json!({ "actionResult": { "status": "FAILED" } }),
            json!({ "actionResult": { "status": "executed" } }),
            json!({ "actionResult": { "status": null } }),
            json!({ "status": "404", "reason": "Vehicle id: 1 not found." }),
        ] {
            assert_eq!(interpret_result(&reply).status, EngineStatus::Error, "{}", reply);
        }
    }
}
