//! Property identifiers for state resolution inputs.

use crate::error::PropsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an input/output property of a state point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyId {
    /// Pressure [kPa]
    P,
    /// Temperature [°C]
    T,
    /// Specific volume [m³/kg]
    V,
    /// Specific internal energy [kJ/kg]
    U,
    /// Specific enthalpy [kJ/kg]
    H,
    /// Specific entropy [kJ/(kg·K)]
    S,
    /// Quality (vapor mass fraction, 0-1)
    X,
}

impl PropertyId {
    /// Human-readable label with units.
    pub fn label(self) -> &'static str {
        match self {
            Self::P => "Pressure [kPa]",
            Self::T => "Temperature [°C]",
            Self::V => "Specific volume [m³/kg]",
            Self::U => "Internal energy [kJ/kg]",
            Self::H => "Enthalpy [kJ/kg]",
            Self::S => "Entropy [kJ/(kg·K)]",
            Self::X => "Quality",
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::P => "P",
            Self::T => "T",
            Self::V => "v",
            Self::U => "u",
            Self::H => "h",
            Self::S => "s",
            Self::X => "x",
        };
        write!(f, "{symbol}")
    }
}

impl FromStr for PropertyId {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" => Ok(Self::P),
            "t" => Ok(Self::T),
            "v" => Ok(Self::V),
            "u" => Ok(Self::U),
            "h" => Ok(Self::H),
            "s" => Ok(Self::S),
            "x" => Ok(Self::X),
            _ => Err(PropsError::UnknownProperty {
                name: s.to_string(),
            }),
        }
    }
}

/// An unordered pair of input properties.
pub type PropertyPair = (PropertyId, PropertyId);

/// Order-independent pair comparison.
pub fn same_pair(a: PropertyPair, b: PropertyPair) -> bool {
    (a.0 == b.0 && a.1 == b.1) || (a.0 == b.1 && a.1 == b.0)
}
