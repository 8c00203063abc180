//! tc-core: stable foundation for thermocycle.
//!
//! Contains:
//! - units (pressure/temperature unit parsing and conversion to base units)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TcError, TcResult};
pub use numeric::*;
pub use units::*;
