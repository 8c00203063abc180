//! Quasi-static process computation with first-law energy balances.
//!
//! A process fixes one property at its start value, resolves the end state
//! from that constraint plus one end-condition property, and closes the
//! energy balance for the transition. Work and heat are per unit mass
//! [kJ/kg], positive when done/added by the system convention of the
//! formulas below.

use crate::error::{CycleError, CycleResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tc_core::numeric::Real;
use tc_core::units::{c_to_k, k_to_c};
use tc_props::{
    PropertyId, PropsError, ResolverOptions, StatePoint, Substance, SubstanceModel, resolve,
};

/// The four supported quasi-static process types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessKind {
    Isobaric,
    Isochoric,
    Isothermal,
    Isentropic,
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Isobaric => "isobaric",
            Self::Isochoric => "isochoric",
            Self::Isothermal => "isothermal",
            Self::Isentropic => "isentropic",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ProcessKind {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "isobaric" => Ok(Self::Isobaric),
            "isochoric" => Ok(Self::Isochoric),
            "isothermal" => Ok(Self::Isothermal),
            "isentropic" => Ok(Self::Isentropic),
            _ => Err(CycleError::UnsupportedProcess {
                kind: s.to_string(),
            }),
        }
    }
}

/// The property value pinning down the end state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndCondition {
    pub prop: PropertyId,
    pub value: Real,
}

/// Heat model for isothermal processes on real substances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IsothermalHeat {
    /// Q = T·(s_end − s_start), the corrected second-law form.
    #[default]
    EntropyDifference,
    /// Bug-compatible with the legacy formula, which differenced the end
    /// entropy against itself and therefore always yields Q = 0.
    LegacyZero,
}

/// Process solver configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    pub resolver: ResolverOptions,
    pub isothermal_heat: IsothermalHeat,
}

/// A record of one quasi-static transition; immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Process {
    pub start: StatePoint,
    pub end: StatePoint,
    pub kind: ProcessKind,
    /// Boundary work [kJ/kg]
    pub w: Real,
    /// Heat exchanged [kJ/kg]
    pub q: Real,
}

/// Compute the end state and energy balance of a process.
pub fn compute_process(
    substance: &Substance,
    start: &StatePoint,
    kind: ProcessKind,
    end: EndCondition,
    options: ProcessOptions,
) -> CycleResult<Process> {
    let (end_state, w, q) = match kind {
        ProcessKind::Isobaric => isobaric(substance, start, end, options)?,
        ProcessKind::Isochoric => isochoric(substance, start, end, options)?,
        ProcessKind::Isothermal => isothermal(substance, start, end, options)?,
        ProcessKind::Isentropic => isentropic(substance, start, end, options)?,
    };

    tracing::debug!(%kind, w, q, "process computed");

    Ok(Process {
        start: *start,
        end: end_state,
        kind,
        w,
        q,
    })
}

fn isobaric(
    substance: &Substance,
    start: &StatePoint,
    end: EndCondition,
    options: ProcessOptions,
) -> CycleResult<(StatePoint, Real, Real)> {
    let end_state = resolve(
        substance,
        options.resolver,
        (PropertyId::P, start.p),
        (end.prop, end.value),
    )?;
    let w = start.p * (end_state.v - start.v);
    let q = end_state.h - start.h;
    Ok((end_state, w, q))
}

fn isochoric(
    substance: &Substance,
    start: &StatePoint,
    end: EndCondition,
    options: ProcessOptions,
) -> CycleResult<(StatePoint, Real, Real)> {
    let end_state = match &substance.model {
        // The public resolver only accepts {P,T} for ideal gases; close the
        // constant-volume constraint with the equation of state instead.
        SubstanceModel::IdealGas(gas) => {
            let r = gas.gas_constant()?;
            match end.prop {
                PropertyId::T => {
                    let p = r * c_to_k(end.value) / start.v;
                    resolve(
                        substance,
                        options.resolver,
                        (PropertyId::P, p),
                        (PropertyId::T, end.value),
                    )?
                }
                PropertyId::P => {
                    let t = k_to_c(end.value * start.v / r);
                    resolve(
                        substance,
                        options.resolver,
                        (PropertyId::P, end.value),
                        (PropertyId::T, t),
                    )?
                }
                other => {
                    return Err(PropsError::UnsupportedPair {
                        first: PropertyId::V,
                        second: other,
                    }
                    .into());
                }
            }
        }
        // No v-input pair exists for real substances; the resolver reports it.
        SubstanceModel::Real(_) => resolve(
            substance,
            options.resolver,
            (PropertyId::V, start.v),
            (end.prop, end.value),
        )?,
    };
    let q = end_state.u - start.u;
    Ok((end_state, 0.0, q))
}

fn isothermal(
    substance: &Substance,
    start: &StatePoint,
    end: EndCondition,
    options: ProcessOptions,
) -> CycleResult<(StatePoint, Real, Real)> {
    match &substance.model {
        SubstanceModel::IdealGas(gas) => {
            let r = gas.gas_constant()?;
            let end_state = match end.prop {
                PropertyId::P => resolve(
                    substance,
                    options.resolver,
                    (PropertyId::T, start.t),
                    (PropertyId::P, end.value),
                )?,
                // Constant T with a volume target: P follows from the EOS
                PropertyId::V => {
                    let p = r * start.t_k() / end.value;
                    resolve(
                        substance,
                        options.resolver,
                        (PropertyId::P, p),
                        (PropertyId::T, start.t),
                    )?
                }
                other => {
                    return Err(PropsError::UnsupportedPair {
                        first: PropertyId::T,
                        second: other,
                    }
                    .into());
                }
            };
            let w = r * start.t_k() * (end_state.v / start.v).ln();
            // Δu = 0 at constant temperature for an ideal gas
            Ok((end_state, w, w))
        }
        SubstanceModel::Real(_) => {
            let end_state = resolve(
                substance,
                options.resolver,
                (PropertyId::T, start.t),
                (end.prop, end.value),
            )?;
            let q = match options.isothermal_heat {
                IsothermalHeat::EntropyDifference => start.t_k() * (end_state.s - start.s),
                IsothermalHeat::LegacyZero => 0.0,
            };
            let w = q - (end_state.u - start.u);
            Ok((end_state, w, q))
        }
    }
}

fn isentropic(
    substance: &Substance,
    start: &StatePoint,
    end: EndCondition,
    options: ProcessOptions,
) -> CycleResult<(StatePoint, Real, Real)> {
    let end_state = match &substance.model {
        SubstanceModel::IdealGas(gas)
            if gas.gamma.is_some() && gas.r.is_some() && gas.cv.is_some() =>
        {
            if end.prop != PropertyId::P {
                return Err(CycleError::MissingPressureCondition);
            }
            let gamma = gas.gamma()?;
            let exponent = (gamma - 1.0) / gamma;
            let t2_k = start.t_k() * (end.value / start.p).powf(exponent);
            resolve(
                substance,
                options.resolver,
                (PropertyId::P, end.value),
                (PropertyId::T, k_to_c(t2_k)),
            )?
        }
        _ => resolve(
            substance,
            options.resolver,
            (PropertyId::S, start.s),
            (end.prop, end.value),
        )?,
    };
    let w = -(end_state.u - start.u);
    Ok((end_state, w, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_props::find_substance;

    fn air_state(p: Real, t: Real) -> StatePoint {
        let air = find_substance("air").unwrap();
        resolve(
            air,
            ResolverOptions::default(),
            (PropertyId::P, p),
            (PropertyId::T, t),
        )
        .unwrap()
    }

    #[test]
    fn parse_process_kind() {
        assert_eq!("isobaric".parse::<ProcessKind>().unwrap(), ProcessKind::Isobaric);
        assert_eq!("Isentropic".parse::<ProcessKind>().unwrap(), ProcessKind::Isentropic);
        let err = "polytropic".parse::<ProcessKind>().unwrap_err();
        assert!(matches!(err, CycleError::UnsupportedProcess { .. }));
    }

    #[test]
    fn isochoric_ideal_gas_has_zero_work() {
        let air = find_substance("air").unwrap();
        let start = air_state(100.0, 25.0);
        let process = compute_process(
            air,
            &start,
            ProcessKind::Isochoric,
            EndCondition {
                prop: PropertyId::T,
                value: 125.0,
            },
            ProcessOptions::default(),
        )
        .unwrap();

        assert_eq!(process.w, 0.0);
        assert!((process.end.v - start.v).abs() < 1e-12);
        assert!((process.q - (process.end.u - start.u)).abs() < 1e-12);
        assert!(process.q > 0.0);
    }

    #[test]
    fn isochoric_real_substance_propagates_unsupported_pair() {
        let water = find_substance("water").unwrap();
        let start = resolve(
            water,
            ResolverOptions::default(),
            (PropertyId::P, 101.4),
            (PropertyId::X, 0.5),
        )
        .unwrap();
        let err = compute_process(
            water,
            &start,
            ProcessKind::Isochoric,
            EndCondition {
                prop: PropertyId::T,
                value: 150.0,
            },
            ProcessOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CycleError::Props(PropsError::UnsupportedPair { .. })
        ));
    }

    #[test]
    fn isobaric_ideal_gas_energy_balance() {
        let air = find_substance("air").unwrap();
        let start = air_state(100.0, 25.0);
        let process = compute_process(
            air,
            &start,
            ProcessKind::Isobaric,
            EndCondition {
                prop: PropertyId::T,
                value: 225.0,
            },
            ProcessOptions::default(),
        )
        .unwrap();

        assert!((process.w - start.p * (process.end.v - start.v)).abs() < 1e-12);
        assert!((process.q - (process.end.h - start.h)).abs() < 1e-12);
        // First law: Q = ΔU + W
        let du = process.end.u - start.u;
        assert!((process.q - (du + process.w)).abs() < 1e-9);
    }

    #[test]
    fn isothermal_ideal_gas_heat_equals_work() {
        let air = find_substance("air").unwrap();
        let start = air_state(100.0, 25.0);
        let process = compute_process(
            air,
            &start,
            ProcessKind::Isothermal,
            EndCondition {
                prop: PropertyId::P,
                value: 400.0,
            },
            ProcessOptions::default(),
        )
        .unwrap();

        assert_eq!(process.q, process.w);
        // Compression: work done on the gas
        assert!(process.w < 0.0);
        let expected = 0.287 * start.t_k() * (process.end.v / start.v).ln();
        assert!((process.w - expected).abs() < 1e-9);
    }

    #[test]
    fn isothermal_real_heat_from_entropy_change() {
        let water = find_substance("water").unwrap();
        let start = resolve(
            water,
            ResolverOptions::default(),
            (PropertyId::T, 150.0),
            (PropertyId::X, 0.2),
        )
        .unwrap();
        let process = compute_process(
            water,
            &start,
            ProcessKind::Isothermal,
            EndCondition {
                prop: PropertyId::X,
                value: 0.8,
            },
            ProcessOptions::default(),
        )
        .unwrap();

        let expected_q = start.t_k() * (process.end.s - start.s);
        assert!((process.q - expected_q).abs() < 1e-9);
        assert!(process.q > 0.0); // evaporation absorbs heat
        assert!((process.w - (process.q - (process.end.u - start.u))).abs() < 1e-12);
    }

    #[test]
    fn isothermal_legacy_mode_zeroes_heat() {
        let water = find_substance("water").unwrap();
        let start = resolve(
            water,
            ResolverOptions::default(),
            (PropertyId::T, 150.0),
            (PropertyId::X, 0.2),
        )
        .unwrap();
        let options = ProcessOptions {
            isothermal_heat: IsothermalHeat::LegacyZero,
            ..Default::default()
        };
        let process = compute_process(
            water,
            &start,
            ProcessKind::Isothermal,
            EndCondition {
                prop: PropertyId::X,
                value: 0.8,
            },
            options,
        )
        .unwrap();

        assert_eq!(process.q, 0.0);
        assert_eq!(process.w, -(process.end.u - start.u));
    }

    #[test]
    fn isentropic_ideal_gas_closed_form() {
        let air = find_substance("air").unwrap();
        let start = air_state(100.0, 25.0);
        let process = compute_process(
            air,
            &start,
            ProcessKind::Isentropic,
            EndCondition {
                prop: PropertyId::P,
                value: 800.0,
            },
            ProcessOptions::default(),
        )
        .unwrap();

        assert_eq!(process.q, 0.0);
        let t2_k = start.t_k() * (800.0f64 / 100.0).powf(0.4 / 1.4);
        assert!((process.end.t_k() - t2_k).abs() < 1e-9);
        // Compression raises internal energy; W = -Δu is negative
        assert!(process.w < 0.0);
    }

    #[test]
    fn isentropic_ideal_gas_needs_pressure_condition() {
        let air = find_substance("air").unwrap();
        let start = air_state(100.0, 25.0);
        let err = compute_process(
            air,
            &start,
            ProcessKind::Isentropic,
            EndCondition {
                prop: PropertyId::T,
                value: 300.0,
            },
            ProcessOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CycleError::MissingPressureCondition));
    }

    #[test]
    fn isentropic_real_substance_expansion() {
        let water = find_substance("water").unwrap();
        let start = resolve(
            water,
            ResolverOptions::default(),
            (PropertyId::P, 3000.0),
            (PropertyId::X, 1.0),
        )
        .unwrap();
        let process = compute_process(
            water,
            &start,
            ProcessKind::Isentropic,
            EndCondition {
                prop: PropertyId::P,
                value: 10.0,
            },
            ProcessOptions::default(),
        )
        .unwrap();

        assert_eq!(process.q, 0.0);
        assert!((process.end.s - start.s).abs() < 1e-9);
        // Expansion extracts work
        assert!(process.w > 0.0);
    }
}
