//! Fixed-topology cycle composition: shared types and dispatch.
//!
//! Every supported cycle is four states joined by four processes. The solver
//! resolves the states through `tc-props`, closes each leg's energy balance,
//! and aggregates net work, heat in/out, and thermal efficiency.

use crate::error::{CycleError, CycleResult};
use crate::process::Process;
use crate::{brayton, carnot, rankine};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tc_core::numeric::Real;
use tc_props::{ResolverOptions, StatePoint, Substance};

/// The supported cycle topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleKind {
    Rankine,
    Brayton,
    Carnot,
}

impl fmt::Display for CycleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rankine => "Rankine",
            Self::Brayton => "Brayton",
            Self::Carnot => "Carnot",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CycleKind {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rankine" => Ok(Self::Rankine),
            "brayton" => Ok(Self::Brayton),
            "carnot" => Ok(Self::Carnot),
            _ => Err(CycleError::UnsupportedCycle {
                kind: s.to_string(),
            }),
        }
    }
}

/// Per-cycle input parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CycleParams {
    /// Steam power cycle between two pressures [kPa].
    Rankine { p_low_kpa: Real, p_high_kpa: Real },
    /// Gas-turbine cycle: compressor pressure ratio and temperature
    /// extremes [°C]. The low-pressure reference is 100 kPa.
    Brayton {
        pressure_ratio: Real,
        t_min_c: Real,
        t_max_c: Real,
    },
    /// Theoretical maximum-efficiency cycle between two reservoir
    /// temperatures [°C].
    Carnot { t_min_c: Real, t_max_c: Real },
}

impl CycleParams {
    pub fn kind(&self) -> CycleKind {
        match self {
            Self::Rankine { .. } => CycleKind::Rankine,
            Self::Brayton { .. } => CycleKind::Brayton,
            Self::Carnot { .. } => CycleKind::Carnot,
        }
    }
}

/// A named state within a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleState {
    pub name: String,
    pub point: StatePoint,
}

impl CycleState {
    pub(crate) fn new(name: &str, point: StatePoint) -> Self {
        Self {
            name: name.to_string(),
            point,
        }
    }
}

/// A named component work term (pump, compressor, turbine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkTerm {
    pub label: String,
    pub value: Real,
}

impl WorkTerm {
    pub(crate) fn new(label: &str, value: Real) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Aggregated scalar metrics of a cycle [kJ/kg].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleMetrics {
    pub w_net: Real,
    pub q_in: Real,
    pub q_out: Real,
    pub efficiency: Real,
    /// Component work terms, in cycle order.
    pub component_work: Vec<WorkTerm>,
}

/// The full result of a cycle computation: an ordered 4-state, 4-process
/// loop plus aggregated metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleOutcome {
    pub kind: CycleKind,
    pub states: Vec<CycleState>,
    pub processes: Vec<Process>,
    pub metrics: CycleMetrics,
}

/// Compute a cycle from its parameters.
pub fn compute_cycle(
    substance: &Substance,
    params: CycleParams,
    resolver: ResolverOptions,
) -> CycleResult<CycleOutcome> {
    let outcome = match params {
        CycleParams::Rankine {
            p_low_kpa,
            p_high_kpa,
        } => rankine::compute(substance, p_low_kpa, p_high_kpa, resolver)?,
        CycleParams::Brayton {
            pressure_ratio,
            t_min_c,
            t_max_c,
        } => brayton::compute(substance, pressure_ratio, t_min_c, t_max_c, resolver)?,
        CycleParams::Carnot { t_min_c, t_max_c } => {
            carnot::compute(substance, t_min_c, t_max_c, resolver)?
        }
    };

    tracing::debug!(
        kind = %outcome.kind,
        w_net = outcome.metrics.w_net,
        efficiency = outcome.metrics.efficiency,
        "cycle computed"
    );

    Ok(outcome)
}
