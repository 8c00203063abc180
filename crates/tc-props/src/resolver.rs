//! Public state-resolution entry point.
//!
//! Dispatches between the ideal-gas and real-substance branches, after
//! validating the input pair. Resolution is atomic: either every field of
//! the returned [`StatePoint`] is populated or the call fails.

use crate::error::{PropsError, PropsResult};
use crate::ideal_gas;
use crate::property::PropertyId;
use crate::real;
use crate::saturation::SaturationLookup;
use crate::state::StatePoint;
use crate::substance::{Substance, SubstanceModel};
use tc_core::numeric::{Real, ensure_finite};
use tc_core::units::{pressure_to_kpa, temperature_to_celsius};

/// Resolver configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolverOptions {
    /// Saturation lookup mode; `Interpolate` unless legacy parity is needed.
    pub lookup: SaturationLookup,
}

/// An input property value, optionally tagged with a unit identifier.
///
/// Units apply to pressure (kPa/bar/atm) and temperature (°C/K) only; other
/// properties are always in base units and carry no tag.
#[derive(Debug, Clone, Copy)]
pub struct RawProperty<'a> {
    pub prop: PropertyId,
    pub value: Real,
    pub unit: Option<&'a str>,
}

/// Resolve a full state from two property values in base units (kPa, °C).
///
/// The two properties must be distinct and form a pair the substance model
/// supports (see [`Substance::supported_pairs`]); the pair is
/// order-independent.
pub fn resolve(
    substance: &Substance,
    options: ResolverOptions,
    first: (PropertyId, Real),
    second: (PropertyId, Real),
) -> PropsResult<StatePoint> {
    if first.0 == second.0 {
        return Err(PropsError::EqualProperties { prop: first.0 });
    }
    for (prop, value) in [first, second] {
        ensure_finite(value, "state input").map_err(|_| PropsError::NonFiniteInput { prop })?;
    }

    match &substance.model {
        SubstanceModel::IdealGas(gas) => {
            let (p, t) = match (first, second) {
                ((PropertyId::P, p), (PropertyId::T, t)) => (p, t),
                ((PropertyId::T, t), (PropertyId::P, p)) => (p, t),
                _ => {
                    return Err(PropsError::UnsupportedPair {
                        first: first.0,
                        second: second.0,
                    });
                }
            };
            ideal_gas::resolve_pt(gas, p, t)
        }
        SubstanceModel::Real(table) => real::resolve(table, options.lookup, first, second),
    }
}

/// Resolve a state from unit-tagged inputs.
///
/// Pressure and temperature values are converted to base units first;
/// an unrecognized unit tag fails with [`tc_core::units::UnitError`].
pub fn resolve_with_units(
    substance: &Substance,
    options: ResolverOptions,
    first: RawProperty<'_>,
    second: RawProperty<'_>,
) -> PropsResult<StatePoint> {
    let first = (first.prop, to_base_units(first)?);
    let second = (second.prop, to_base_units(second)?);
    resolve(substance, options, first, second)
}

fn to_base_units(raw: RawProperty<'_>) -> PropsResult<Real> {
    match (raw.prop, raw.unit) {
        (PropertyId::P, Some(unit)) => Ok(pressure_to_kpa(raw.value, unit)?),
        (PropertyId::T, Some(unit)) => Ok(temperature_to_celsius(raw.value, unit)?),
        _ => Ok(raw.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_substance;

    #[test]
    fn equal_properties_are_rejected() {
        let water = find_substance("water").unwrap();
        let err = resolve(
            water,
            ResolverOptions::default(),
            (PropertyId::P, 100.0),
            (PropertyId::P, 200.0),
        )
        .unwrap_err();
        assert!(matches!(err, PropsError::EqualProperties { .. }));
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let air = find_substance("air").unwrap();
        let err = resolve(
            air,
            ResolverOptions::default(),
            (PropertyId::P, f64::NAN),
            (PropertyId::T, 25.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PropsError::NonFiniteInput { prop: PropertyId::P }
        ));
    }

    #[test]
    fn ideal_gas_rejects_non_pt_pairs() {
        let air = find_substance("air").unwrap();
        for pair in [
            (PropertyId::P, PropertyId::S),
            (PropertyId::T, PropertyId::X),
            (PropertyId::H, PropertyId::V),
        ] {
            let err = resolve(
                air,
                ResolverOptions::default(),
                (pair.0, 100.0),
                (pair.1, 0.5),
            )
            .unwrap_err();
            assert!(matches!(err, PropsError::UnsupportedPair { .. }));
        }
    }

    #[test]
    fn ideal_gas_pt_is_order_independent() {
        let air = find_substance("air").unwrap();
        let a = resolve(
            air,
            ResolverOptions::default(),
            (PropertyId::P, 100.0),
            (PropertyId::T, 25.0),
        )
        .unwrap();
        let b = resolve(
            air,
            ResolverOptions::default(),
            (PropertyId::T, 25.0),
            (PropertyId::P, 100.0),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unit_tagged_inputs_convert_before_resolution() {
        let air = find_substance("air").unwrap();
        let tagged = resolve_with_units(
            air,
            ResolverOptions::default(),
            RawProperty {
                prop: PropertyId::P,
                value: 1.0,
                unit: Some("bar"),
            },
            RawProperty {
                prop: PropertyId::T,
                value: 298.15,
                unit: Some("K"),
            },
        )
        .unwrap();
        let base = resolve(
            air,
            ResolverOptions::default(),
            (PropertyId::P, 100.0),
            (PropertyId::T, 25.0),
        )
        .unwrap();
        assert!((tagged.v - base.v).abs() < 1e-12);
        assert!((tagged.h - base.h).abs() < 1e-9);
    }

    #[test]
    fn unknown_unit_fails() {
        let air = find_substance("air").unwrap();
        let err = resolve_with_units(
            air,
            ResolverOptions::default(),
            RawProperty {
                prop: PropertyId::P,
                value: 14.7,
                unit: Some("psi"),
            },
            RawProperty {
                prop: PropertyId::T,
                value: 25.0,
                unit: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, PropsError::Unit(_)));
    }
}
