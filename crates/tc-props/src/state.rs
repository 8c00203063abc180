//! Resolved thermodynamic state representation.

use serde::{Deserialize, Serialize};
use tc_core::numeric::Real;
use tc_core::units::c_to_k;

/// Specific volume [m³/kg].
///
/// Not worth a dedicated wrapper type at this scale; documented f64 alias.
pub type SpecVolume = Real;

/// Specific enthalpy [kJ/kg].
pub type SpecEnthalpy = Real;

/// Specific entropy [kJ/(kg·K)].
pub type SpecEntropy = Real;

/// Specific internal energy [kJ/kg].
pub type SpecEnergy = Real;

/// A fully resolved thermodynamic state.
///
/// Produced by a single resolver call and never mutated afterward. Pressure
/// is in kPa, temperature in °C; specific quantities are per kg.
///
/// `x` is `Some` only when the resolving branch explicitly computed a
/// two-phase quality; single-phase branches leave it `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatePoint {
    /// Pressure [kPa]
    pub p: Real,
    /// Temperature [°C]
    pub t: Real,
    /// Specific volume [m³/kg]
    pub v: SpecVolume,
    /// Specific internal energy [kJ/kg]
    pub u: SpecEnergy,
    /// Specific enthalpy [kJ/kg]
    pub h: SpecEnthalpy,
    /// Specific entropy [kJ/(kg·K)]
    pub s: SpecEntropy,
    /// Quality (vapor mass fraction), mixture states only
    pub x: Option<Real>,
}

impl StatePoint {
    /// Absolute temperature [K].
    pub fn t_k(&self) -> Real {
        c_to_k(self.t)
    }
}
