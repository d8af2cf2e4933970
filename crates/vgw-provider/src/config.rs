//! Provider connection settings

use std::time::Duration;

use serde::Deserialize;

use crate::envelope::{RequestTemplate, DEFAULT_RESPONSE_TYPE};

/// Default provider base address
pub const DEFAULT_BASE_URL: &str = "http://gmapi.azurewebsites.net/";

/// Service path for each provider operation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServicePaths {
    pub vehicle_info: String,
    pub security_status: String,
    pub energy: String,
    pub engine_action: String,
}

impl Default for ServicePaths {
    fn default() -> Self {
        Self {
            vehicle_info: "getVehicleInfoService".to_string(),
            security_status: "getSecurityStatusService".to_string(),
            energy: "getEnergyService".to_string(),
            engine_action: "actionEngineService".to_string(),
        }
    }
}

/// `[provider]` section of the gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider base address; service paths are appended to it
    pub base_url: String,
    /// Response-format marker sent with every request
    pub response_type: String,
    /// Whole-request timeout. Unset means the transport default.
    pub request_timeout_secs: Option<u64>,
    pub services: ServicePaths,
}

impl ProviderConfig {
    /// Config pointing at `base_url` with everything else defaulted
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn request_template(&self) -> RequestTemplate {
        RequestTemplate::new(self.response_type.clone())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            response_type: DEFAULT_RESPONSE_TYPE.to_string(),
            request_timeout_secs: None,
            services: ServicePaths::default(),
        }
    }
}
