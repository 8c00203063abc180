//! Ideal Brayton cycle: isentropic compressor and turbine, isobaric
//! combustor and exhaust, on an ideal gas.

use crate::cycle::{CycleKind, CycleMetrics, CycleOutcome, CycleState, WorkTerm};
use crate::error::{CycleError, CycleResult};
use crate::process::{Process, ProcessKind};
use tc_core::numeric::Real;
use tc_core::units::{c_to_k, k_to_c};
use tc_props::{PropertyId, ResolverOptions, Substance, resolve};

/// Low-pressure reference: atmospheric intake [kPa].
const P_LOW: Real = 100.0;

pub(crate) fn compute(
    substance: &Substance,
    pressure_ratio: Real,
    t_min_c: Real,
    t_max_c: Real,
    resolver: ResolverOptions,
) -> CycleResult<CycleOutcome> {
    let Some(gas) = substance.ideal_gas() else {
        return Err(CycleError::SubstanceIncompatible {
            what: "Brayton cycle requires an ideal gas (e.g. air)",
        });
    };
    if !(pressure_ratio.is_finite() && pressure_ratio > 1.0) {
        return Err(CycleError::InvalidParams {
            what: "Brayton pressure ratio must be > 1",
        });
    }
    if t_max_c <= t_min_c {
        return Err(CycleError::InvalidParams {
            what: "Brayton requires t_max > t_min",
        });
    }

    let cp = gas.cp()?;
    let gamma = gas.gamma()?;
    let r = gas.gas_constant()?;
    let exponent = (gamma - 1.0) / gamma;
    let p_high = P_LOW * pressure_ratio;

    // 1: compressor inlet
    let s1 = resolve(
        substance,
        resolver,
        (PropertyId::P, P_LOW),
        (PropertyId::T, t_min_c),
    )?;
    // 2: isentropic compressor discharge
    let t2_k = c_to_k(t_min_c) * pressure_ratio.powf(exponent);
    let s2 = resolve(
        substance,
        resolver,
        (PropertyId::P, p_high),
        (PropertyId::T, k_to_c(t2_k)),
    )?;
    // 3: turbine inlet at peak temperature
    let s3 = resolve(
        substance,
        resolver,
        (PropertyId::P, p_high),
        (PropertyId::T, t_max_c),
    )?;
    // 4: isentropic turbine exhaust
    let t4_k = c_to_k(t_max_c) * pressure_ratio.powf(-exponent);
    let s4 = resolve(
        substance,
        resolver,
        (PropertyId::P, P_LOW),
        (PropertyId::T, k_to_c(t4_k)),
    )?;

    let t1_k = s1.t_k();
    let t3_k = s3.t_k();
    let w_compressor = cp * (t2_k - t1_k);
    let q_in = cp * (t3_k - t2_k);
    let w_turbine = cp * (t3_k - t4_k);
    let q_out = cp * (t4_k - t1_k);
    let w_net = w_turbine - w_compressor;
    let efficiency = w_net / q_in;

    let states = vec![
        CycleState::new("1 (compressor inlet)", s1),
        CycleState::new("2 (combustor inlet)", s2),
        CycleState::new("3 (turbine inlet)", s3),
        CycleState::new("4 (exhaust)", s4),
    ];

    let processes = vec![
        Process {
            start: s1,
            end: s2,
            kind: ProcessKind::Isentropic,
            w: -w_compressor,
            q: 0.0,
        },
        Process {
            start: s2,
            end: s3,
            kind: ProcessKind::Isobaric,
            // Isobaric boundary work P·Δv = R·ΔT for an ideal gas
            w: r * (t3_k - t2_k),
            q: q_in,
        },
        Process {
            start: s3,
            end: s4,
            kind: ProcessKind::Isentropic,
            w: w_turbine,
            q: 0.0,
        },
        Process {
            start: s4,
            end: s1,
            kind: ProcessKind::Isobaric,
            w: r * (t1_k - t4_k),
            q: -q_out,
        },
    ];

    Ok(CycleOutcome {
        kind: CycleKind::Brayton,
        states,
        processes,
        metrics: CycleMetrics {
            w_net,
            q_in,
            q_out,
            efficiency,
            component_work: vec![
                WorkTerm::new("W_compressor (input)", w_compressor),
                WorkTerm::new("W_turbine (output)", w_turbine),
            ],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_props::find_substance;

    #[test]
    fn brayton_efficiency_matches_the_pressure_ratio_form() {
        let air = find_substance("air").unwrap();
        let outcome = compute(air, 8.0, 25.0, 1200.0, ResolverOptions::default()).unwrap();

        let expected = 1.0 - 8.0f64.powf(-0.4 / 1.4);
        assert!((outcome.metrics.efficiency - expected).abs() < 1e-9);
    }

    #[test]
    fn brayton_temperature_ordering() {
        let air = find_substance("air").unwrap();
        let outcome = compute(air, 8.0, 25.0, 1200.0, ResolverOptions::default()).unwrap();

        let t: Vec<Real> = outcome.states.iter().map(|s| s.point.t).collect();
        assert!(t[1] > t[0], "compression heats the gas");
        assert!(t[3] < t[2], "expansion cools the gas");
        assert!(t[2] > t[1]);
    }

    #[test]
    fn brayton_rejects_real_substance() {
        let water = find_substance("water").unwrap();
        let err = compute(water, 8.0, 25.0, 1200.0, ResolverOptions::default()).unwrap_err();
        assert!(matches!(err, CycleError::SubstanceIncompatible { .. }));
    }

    #[test]
    fn brayton_rejects_unity_pressure_ratio() {
        let air = find_substance("air").unwrap();
        let err = compute(air, 1.0, 25.0, 1200.0, ResolverOptions::default()).unwrap_err();
        assert!(matches!(err, CycleError::InvalidParams { .. }));
    }

    #[test]
    fn high_pressure_states_sit_at_the_ratio() {
        let air = find_substance("air").unwrap();
        let outcome = compute(air, 8.0, 25.0, 1200.0, ResolverOptions::default()).unwrap();

        assert_eq!(outcome.states[0].point.p, 100.0);
        assert_eq!(outcome.states[1].point.p, 800.0);
        assert_eq!(outcome.states[2].point.p, 800.0);
        assert_eq!(outcome.states[3].point.p, 100.0);
    }
}
