//! Pressure/temperature unit handling.
//!
//! The engine works in the base units of the published saturation tables:
//! kPa for pressure and °C for temperature. Inputs arrive tagged with a unit
//! identifier and are converted once at the boundary; everything downstream
//! is plain `Real` in base units.
//!
//! Unrecognized unit identifiers are an explicit [`UnitError::UnknownUnit`],
//! never a silent passthrough.

use crate::numeric::Real;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uom::si::f64::{Pressure, ThermodynamicTemperature};
use uom::si::pressure::{atmosphere, bar, kilopascal};
use uom::si::thermodynamic_temperature::{degree_celsius, kelvin};

/// Offset between the Celsius and Kelvin scales.
pub const CELSIUS_TO_KELVIN: Real = 273.15;

#[inline]
pub fn c_to_k(t_c: Real) -> Real {
    t_c + CELSIUS_TO_KELVIN
}

#[inline]
pub fn k_to_c(t_k: Real) -> Real {
    t_k - CELSIUS_TO_KELVIN
}

/// Error in unit parsing or conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit {
        unit: String,
        quantity: &'static str,
    },
}

/// Supported absolute-pressure units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureUnit {
    Kilopascal,
    Bar,
    Atmosphere,
}

impl PressureUnit {
    /// Convert a value in this unit to kPa.
    pub fn to_kilopascals(self, value: Real) -> Real {
        let p = match self {
            Self::Kilopascal => Pressure::new::<kilopascal>(value),
            Self::Bar => Pressure::new::<bar>(value),
            Self::Atmosphere => Pressure::new::<atmosphere>(value),
        };
        p.get::<kilopascal>()
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kilopascal => write!(f, "kPa"),
            Self::Bar => write!(f, "bar"),
            Self::Atmosphere => write!(f, "atm"),
        }
    }
}

impl FromStr for PressureUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kpa" => Ok(Self::Kilopascal),
            "bar" => Ok(Self::Bar),
            "atm" => Ok(Self::Atmosphere),
            _ => Err(UnitError::UnknownUnit {
                unit: s.to_string(),
                quantity: "pressure",
            }),
        }
    }
}

/// Supported temperature units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
}

impl TemperatureUnit {
    /// Convert a value in this unit to °C.
    pub fn to_celsius(self, value: Real) -> Real {
        let t = match self {
            Self::Celsius => ThermodynamicTemperature::new::<degree_celsius>(value),
            Self::Kelvin => ThermodynamicTemperature::new::<kelvin>(value),
        };
        t.get::<degree_celsius>()
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius => write!(f, "°C"),
            Self::Kelvin => write!(f, "K"),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "°c" | "c" | "celsius" => Ok(Self::Celsius),
            "k" | "kelvin" => Ok(Self::Kelvin),
            _ => Err(UnitError::UnknownUnit {
                unit: s.to_string(),
                quantity: "temperature",
            }),
        }
    }
}

/// Parse a pressure unit tag and convert `value` to kPa.
pub fn pressure_to_kpa(value: Real, unit: &str) -> Result<Real, UnitError> {
    Ok(unit.parse::<PressureUnit>()?.to_kilopascals(value))
}

/// Parse a temperature unit tag and convert `value` to °C.
pub fn temperature_to_celsius(value: Real, unit: &str) -> Result<Real, UnitError> {
    Ok(unit.parse::<TemperatureUnit>()?.to_celsius(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpa_is_identity() {
        assert_eq!(pressure_to_kpa(101.325, "kPa").unwrap(), 101.325);
    }

    #[test]
    fn bar_to_kpa() {
        let kpa = pressure_to_kpa(1.0, "bar").unwrap();
        assert!((kpa - 100.0).abs() < 1e-9);
    }

    #[test]
    fn atm_to_kpa() {
        let kpa = pressure_to_kpa(1.0, "atm").unwrap();
        assert!((kpa - 101.325).abs() < 1e-9);
    }

    #[test]
    fn celsius_is_identity() {
        assert_eq!(temperature_to_celsius(25.0, "°C").unwrap(), 25.0);
    }

    #[test]
    fn kelvin_to_celsius() {
        let c = temperature_to_celsius(300.0, "K").unwrap();
        assert!((c - 26.85).abs() < 1e-9);
    }

    #[test]
    fn unknown_pressure_unit_is_rejected() {
        let err = pressure_to_kpa(14.7, "psi").unwrap_err();
        assert!(matches!(err, UnitError::UnknownUnit { unit, .. } if unit == "psi"));
    }

    #[test]
    fn unknown_temperature_unit_is_rejected() {
        let err = temperature_to_celsius(70.0, "F").unwrap_err();
        assert!(matches!(err, UnitError::UnknownUnit { .. }));
    }

    #[test]
    fn celsius_kelvin_round_trip() {
        let t = 123.4;
        assert!((k_to_c(c_to_k(t)) - t).abs() < 1e-12);
    }

    proptest::proptest! {
        #[test]
        fn pressure_conversion_is_linear(value in 0.0f64..1e6) {
            let one = pressure_to_kpa(1.0, "bar").unwrap();
            let scaled = pressure_to_kpa(value, "bar").unwrap();
            proptest::prop_assert!((scaled - value * one).abs() < 1e-6 * one.max(scaled.abs()));
        }

        #[test]
        fn kelvin_tag_round_trips(t_k in 0.0f64..2000.0) {
            let t_c = temperature_to_celsius(t_k, "K").unwrap();
            proptest::prop_assert!((c_to_k(t_c) - t_k).abs() < 1e-9);
        }
    }
}
