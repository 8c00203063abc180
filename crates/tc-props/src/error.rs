//! Property resolution errors.

use crate::property::PropertyId;
use tc_core::units::UnitError;
use thiserror::Error;

/// Result type for property resolution.
pub type PropsResult<T> = Result<T, PropsError>;

/// Errors that can occur while resolving a thermodynamic state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropsError {
    /// The two input properties must be distinct.
    #[error("State properties must be distinct: {prop} was given twice")]
    EqualProperties { prop: PropertyId },

    /// Input value is NaN or infinite.
    #[error("Non-finite value for property {prop}")]
    NonFiniteInput { prop: PropertyId },

    /// Finite input outside the physically meaningful range.
    #[error("Value out of physical range for {prop}: {value}")]
    OutOfRange { prop: PropertyId, value: f64 },

    /// Quality outside [0, 1].
    #[error("Quality must be within [0, 1], got {x}")]
    InvalidQuality { x: f64 },

    /// The substance model has no resolution path for this input pair.
    #[error("Unsupported property pair ({first}, {second}) for this substance")]
    UnsupportedPair {
        first: PropertyId,
        second: PropertyId,
    },

    /// Ideal-gas coefficient required by the calculation is absent.
    #[error("Missing ideal-gas property data: {what}")]
    MissingPropertyData { what: &'static str },

    /// P and T alone cannot fix a state on the saturation dome.
    #[error("Cannot fix a state from P and T inside the saturation dome; provide quality or another property")]
    AmbiguousMixture,

    /// A region/pair combination the simplified model does not cover.
    #[error("Not implemented: {what}")]
    NotImplemented { what: &'static str },

    /// Substance declared as real but carries no saturation rows.
    #[error("Substance has no saturation data")]
    NoSaturationData,

    /// Saturation table violates its ordering invariant.
    #[error("Invalid saturation table: {what}")]
    InvalidTable { what: &'static str },

    /// Property name not recognized.
    #[error("Unknown property '{name}'")]
    UnknownProperty { name: String },

    /// Unit parse/conversion failure on an input value.
    #[error(transparent)]
    Unit(#[from] UnitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PropsError::InvalidQuality { x: 1.5 };
        assert!(err.to_string().contains("1.5"));

        let err = PropsError::UnsupportedPair {
            first: PropertyId::H,
            second: PropertyId::V,
        };
        assert!(err.to_string().contains("h"));
        assert!(err.to_string().contains("v"));
    }

    #[test]
    fn unit_error_converts() {
        let unit_err = UnitError::UnknownUnit {
            unit: "psi".into(),
            quantity: "pressure",
        };
        let err: PropsError = unit_err.into();
        assert!(matches!(err, PropsError::Unit(_)));
    }
}
