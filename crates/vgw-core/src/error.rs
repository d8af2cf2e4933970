//! Error types shared by every gateway backend

use thiserror::Error;

use crate::models::EnergyKind;

/// Result type for backend operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Message returned for any engine action outside `START`/`STOP`
pub const UNSUPPORTED_ACTION_MESSAGE: &str = "This action is not supported.";

/// Errors that can occur while serving a vehicle request.
///
/// The HTTP layer renders all of these as a single free-text message, but the
/// kind is kept here so callers and tests can tell them apart.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Provider unreachable or the request could not be sent
    #[error("Transport error: {0}")]
    Transport(String),

    /// Provider body was not valid JSON
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Expected field missing from an otherwise parsed envelope
    #[error("Unexpected provider response: {0}")]
    UpstreamSchema(String),

    /// Provider answered with a non-success envelope status
    #[error("Provider rejected request ({status}): {reason}")]
    UpstreamRejected {
        /// Envelope status code as sent by the provider
        status: String,
        /// Provider's explanation
        reason: String,
    },

    /// The requested energy field carries the "not applicable" sentinel
    #[error("This vehicle runs on {0}")]
    UnsupportedEnergy(EnergyKind),

    /// Engine action outside the accepted vocabulary
    #[error("This action is not supported.")]
    InvalidAction(String),
}

impl GatewayError {
    /// Create a schema error for a missing or mistyped field
    pub fn schema(detail: impl Into<String>) -> Self {
        Self::UpstreamSchema(detail.into())
    }

    /// True for failures caused by the caller or the vehicle rather than by
    /// the provider link.
    pub fn is_domain_rejection(&self) -> bool {
        matches!(
            self,
            GatewayError::UnsupportedEnergy(_) | GatewayError::InvalidAction(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_energy_names_requested_kind() {
        assert_eq!(
            GatewayError::UnsupportedEnergy(EnergyKind::Fuel).to_string(),
            "This vehicle runs on fuel"
        );
        assert_eq!(
            GatewayError::UnsupportedEnergy(EnergyKind::Battery).to_string(),
            "This vehicle runs on battery"
        );
    }

    #[test]
    fn invalid_action_has_fixed_message() {
        let err = GatewayError::InvalidAction("start".to_string());
        assert_eq!(err.to_string(), UNSUPPORTED_ACTION_MESSAGE);
        assert!(err.is_domain_rejection());
    }

    #[test]
    fn transport_is_not_domain_rejection() {
        assert!(!GatewayError::Transport("refused".into()).is_domain_rejection());
        assert!(!GatewayError::schema("missing field `vin`").is_domain_rejection());
    }
}
