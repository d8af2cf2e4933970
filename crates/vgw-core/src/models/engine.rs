//! Engine command models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Provider result code that marks a command as carried out
pub const EXECUTED_CODE: &str = "EXECUTED";

/// Engine action accepted from callers.
///
/// Parsing is case-sensitive: only `START` and `STOP` are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineAction {
    Start,
    Stop,
}

impl EngineAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineAction::Start => "START",
            EngineAction::Stop => "STOP",
        }
    }

    /// Command string in the provider's vocabulary (`START_VEHICLE`, `STOP_VEHICLE`)
    pub fn provider_command(&self) -> &'static str {
        match self {
            EngineAction::Start => "START_VEHICLE",
            EngineAction::Stop => "STOP_VEHICLE",
        }
    }
}

impl fmt::Display for EngineAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineAction {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "START" => Ok(EngineAction::Start),
            "STOP" => Ok(EngineAction::Stop),
            other => Err(GatewayError::InvalidAction(other.to_string())),
        }
    }
}

/// Outcome of an engine command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineResult {
    pub status: EngineStatus,
}

impl EngineResult {
    pub fn success() -> Self {
        Self {
            status: EngineStatus::Success,
        }
    }

    pub fn error() -> Self {
        Self {
            status: EngineStatus::Error,
        }
    }

    /// Classify a provider result code. Only the exact success code counts.
    pub fn from_result_code(code: Option<&str>) -> Self {
        match code {
            Some(EXECUTED_CODE) => Self::success(),
            _ => Self::error(),
        }
    }
}
