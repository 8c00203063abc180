//! Ideal Rankine cycle: isentropic pump and turbine, isobaric boiler and
//! condenser, on a real substance.

use crate::cycle::{CycleKind, CycleMetrics, CycleOutcome, CycleState, WorkTerm};
use crate::error::{CycleError, CycleResult};
use crate::process::{Process, ProcessKind};
use tc_core::numeric::Real;
use tc_props::{PropertyId, ResolverOptions, Substance, resolve};

pub(crate) fn compute(
    substance: &Substance,
    p_low: Real,
    p_high: Real,
    resolver: ResolverOptions,
) -> CycleResult<CycleOutcome> {
    if !substance.is_real() {
        return Err(CycleError::SubstanceIncompatible {
            what: "Rankine cycle requires a real substance (e.g. water)",
        });
    }
    if !(p_low > 0.0 && p_high > p_low) {
        return Err(CycleError::InvalidParams {
            what: "Rankine pressures must satisfy 0 < p_low < p_high",
        });
    }

    // 1: saturated liquid leaving the condenser
    let s1 = resolve(
        substance,
        resolver,
        (PropertyId::P, p_low),
        (PropertyId::X, 0.0),
    )?;
    // 2: isentropic pump discharge
    let s2 = resolve(
        substance,
        resolver,
        (PropertyId::P, p_high),
        (PropertyId::S, s1.s),
    )?;
    // 3: saturated vapor leaving the boiler
    let s3 = resolve(
        substance,
        resolver,
        (PropertyId::P, p_high),
        (PropertyId::X, 1.0),
    )?;
    // 4: isentropic turbine exhaust
    let s4 = resolve(
        substance,
        resolver,
        (PropertyId::P, p_low),
        (PropertyId::S, s3.s),
    )?;

    let w_pump = s2.h - s1.h;
    let q_in = s3.h - s2.h;
    let w_turbine = s3.h - s4.h;
    let q_out = s4.h - s1.h;
    let w_net = w_turbine - w_pump;
    let efficiency = w_net / q_in;

    let states = vec![
        CycleState::new("1 (pump inlet)", s1),
        CycleState::new("2 (boiler inlet)", s2),
        CycleState::new("3 (turbine inlet)", s3),
        CycleState::new("4 (condenser inlet)", s4),
    ];

    let processes = vec![
        Process {
            start: s1,
            end: s2,
            kind: ProcessKind::Isentropic,
            w: -w_pump,
            q: 0.0,
        },
        Process {
            start: s2,
            end: s3,
            kind: ProcessKind::Isobaric,
            w: p_high * (s3.v - s2.v),
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
            w: p_low * (s1.v - s4.v),
            q: -q_out,
        },
    ];

    Ok(CycleOutcome {
        kind: CycleKind::Rankine,
        states,
        processes,
        metrics: CycleMetrics {
            w_net,
            q_in,
            q_out,
            efficiency,
            component_work: vec![
                WorkTerm::new("W_pump (input)", w_pump),
                WorkTerm::new("W_turbine (output)", w_turbine),
            ],
        },
    })
}
