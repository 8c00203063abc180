//! Process and cycle solver errors.

use tc_props::PropsError;
use thiserror::Error;

/// Result type for process/cycle computations.
pub type CycleResult<T> = Result<T, CycleError>;

/// Errors from the process and cycle solvers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// Process type identifier not recognized.
    #[error("Unsupported process type '{kind}'")]
    UnsupportedProcess { kind: String },

    /// Cycle type identifier not recognized.
    #[error("Unsupported cycle type '{kind}'")]
    UnsupportedCycle { kind: String },

    /// The substance model does not fit the requested cycle.
    #[error("Substance incompatible with cycle: {what}")]
    SubstanceIncompatible { what: &'static str },

    /// Isentropic ideal-gas closed form needs a final pressure.
    #[error("Isentropic ideal-gas process requires a final pressure (P) end condition")]
    MissingPressureCondition,

    /// Cycle parameters out of range.
    #[error("Invalid cycle parameters: {what}")]
    InvalidParams { what: &'static str },

    /// State resolution failure, propagated unchanged.
    #[error(transparent)]
    Props(#[from] PropsError),
}
