//! tc-cycles: quasi-static process and thermodynamic cycle solvers.
//!
//! Provides:
//! - First-law energy balances for isobaric, isochoric, isothermal, and
//!   isentropic processes between resolved states
//! - Fixed-topology 4-state cycles: Rankine (real substance), Brayton
//!   (ideal gas), Carnot (real substance)
//!
//! All computations are synchronous and pure; state resolution is delegated
//! to `tc-props` and failures propagate unchanged.
//!
//! # Example
//!
//! ```
//! use tc_cycles::{CycleParams, compute_cycle};
//! use tc_props::{ResolverOptions, find_substance};
//!
//! let air = find_substance("air").unwrap();
//! let params = CycleParams::Brayton {
//!     pressure_ratio: 8.0,
//!     t_min_c: 25.0,
//!     t_max_c: 1200.0,
//! };
//! let outcome = compute_cycle(air, params, ResolverOptions::default()).unwrap();
//! assert!(outcome.metrics.efficiency > 0.0);
//! ```

mod brayton;
mod carnot;
pub mod cycle;
pub mod error;
pub mod process;
mod rankine;

// Re-exports for ergonomics
pub use cycle::{
    CycleKind, CycleMetrics, CycleOutcome, CycleParams, CycleState, WorkTerm, compute_cycle,
};
pub use error::{CycleError, CycleResult};
pub use process::{
    EndCondition, IsothermalHeat, Process, ProcessKind, ProcessOptions, compute_process,
};
