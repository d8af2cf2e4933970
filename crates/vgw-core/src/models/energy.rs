//! Energy level models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which energy system a caller is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyKind {
    Fuel,
    Battery,
}

impl EnergyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyKind::Fuel => "fuel",
            EnergyKind::Battery => "battery",
        }
    }
}

impl fmt::Display for EnergyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fuel" => Ok(EnergyKind::Fuel),
            "battery" => Ok(EnergyKind::Battery),
            _ => Err(format!("Unknown energy kind: '{}'", s)),
        }
    }
}

/// Remaining energy, as reported by the provider.
///
/// The percentage is passed through as the provider's string; it is not
/// parsed or range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyLevel {
    pub percentage: String,
}

impl EnergyLevel {
    pub fn new(percentage: impl Into<String>) -> Self {
        Self {
            percentage: percentage.into(),
        }
    }
}
