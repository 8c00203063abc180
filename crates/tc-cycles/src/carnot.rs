//! Carnot cycle inside the saturation dome of a real substance:
//! isothermal heat exchange along two isotherms, isentropic legs between.

use crate::cycle::{CycleKind, CycleMetrics, CycleOutcome, CycleState};
use crate::error::{CycleError, CycleResult};
use crate::process::{Process, ProcessKind};
use tc_core::numeric::Real;
use tc_core::units::c_to_k;
use tc_props::{PropertyId, ResolverOptions, Substance, resolve};

pub(crate) fn compute(
    substance: &Substance,
    t_min_c: Real,
    t_max_c: Real,
    resolver: ResolverOptions,
) -> CycleResult<CycleOutcome> {
    if !substance.is_real() {
        return Err(CycleError::SubstanceIncompatible {
            what: "this Carnot model requires a real substance",
        });
    }
    if t_max_c <= t_min_c {
        return Err(CycleError::InvalidParams {
            what: "Carnot requires t_max > t_min",
        });
    }

    let t_h_k = c_to_k(t_max_c);
    let t_l_k = c_to_k(t_min_c);

    // 1-2: isothermal evaporation across the dome at T_H
    let s1 = resolve(
        substance,
        resolver,
        (PropertyId::T, t_max_c),
        (PropertyId::X, 0.0),
    )?;
    let s2 = resolve(
        substance,
        resolver,
        (PropertyId::T, t_max_c),
        (PropertyId::X, 1.0),
    )?;
    // 2-3 and 4-1: isentropic legs to/from the cold isotherm
    let s3 = resolve(
        substance,
        resolver,
        (PropertyId::T, t_min_c),
        (PropertyId::S, s2.s),
    )?;
    let s4 = resolve(
        substance,
        resolver,
        (PropertyId::T, t_min_c),
        (PropertyId::S, s1.s),
    )?;

    let q_in = t_h_k * (s2.s - s1.s);
    // s3 = s2 and s4 = s1, so this is T_L·(s2 − s1)
    let q_out = t_l_k * (s3.s - s4.s);
    let w_net = q_in - q_out;
    let efficiency = w_net / q_in;

    let states = vec![
        CycleState::new("1 (saturated liquid, T_H)", s1),
        CycleState::new("2 (saturated vapor, T_H)", s2),
        CycleState::new("3 (expansion outlet, T_L)", s3),
        CycleState::new("4 (compression inlet, T_L)", s4),
    ];

    let processes = vec![
        Process {
            start: s1,
            end: s2,
            kind: ProcessKind::Isothermal,
            w: q_in - (s2.u - s1.u),
            q: q_in,
        },
        Process {
            start: s2,
            end: s3,
            kind: ProcessKind::Isentropic,
            w: s2.u - s3.u,
            q: 0.0,
        },
        Process {
            start: s3,
            end: s4,
            kind: ProcessKind::Isothermal,
            w: -q_out - (s4.u - s3.u),
            q: -q_out,
        },
        Process {
            start: s4,
            end: s1,
            kind: ProcessKind::Isentropic,
            w: s4.u - s1.u,
            q: 0.0,
        },
    ];

    Ok(CycleOutcome {
        kind: CycleKind::Carnot,
        states,
        processes,
        metrics: CycleMetrics {
            w_net,
            q_in,
            q_out,
            efficiency,
            component_work: Vec::new(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_props::find_substance;

    #[test]
    fn carnot_efficiency_is_the_temperature_ratio() {
        // Reservoir temperatures chosen inside each substance's dome
        for (id, t_low, t_high) in [("water", 50.0, 250.0), ("NH3", -20.0, 50.0)] {
            let substance = find_substance(id).unwrap();
            let outcome = compute(substance, t_low, t_high, ResolverOptions::default()).unwrap();

            let expected = 1.0 - c_to_k(t_low) / c_to_k(t_high);
            assert!(
                (outcome.metrics.efficiency - expected).abs() < 1e-9,
                "{id}: {} vs {expected}",
                outcome.metrics.efficiency
            );
        }
    }

    #[test]
    fn isentropic_legs_preserve_entropy() {
        let water = find_substance("water").unwrap();
        let outcome = compute(water, 50.0, 250.0, ResolverOptions::default()).unwrap();

        let s = |i: usize| outcome.states[i].point.s;
        assert!((s(2) - s(1)).abs() < 1e-12);
        assert!((s(3) - s(0)).abs() < 1e-12);
    }

    #[test]
    fn carnot_rejects_ideal_gas() {
        let air = find_substance("air").unwrap();
        let err = compute(air, 50.0, 250.0, ResolverOptions::default()).unwrap_err();
        assert!(matches!(err, CycleError::SubstanceIncompatible { .. }));
    }

    #[test]
    fn carnot_rejects_inverted_temperatures() {
        let water = find_substance("water").unwrap();
        let err = compute(water, 250.0, 50.0, ResolverOptions::default()).unwrap_err();
        assert!(matches!(err, CycleError::InvalidParams { .. }));
    }
}
