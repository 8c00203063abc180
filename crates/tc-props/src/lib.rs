//! tc-props: substance definitions and thermodynamic state resolution.
//!
//! Provides:
//! - A static, immutable substance catalog (ideal gases and saturation-table
//!   real substances)
//! - Region-aware state resolution from two independent properties
//! - A queryable capability surface (`Substance::supported_pairs`)
//!
//! # Model scope
//!
//! This is not a general equation-of-state library. Real substances use
//! small fixed saturation tables with linear interpolation (or nearest-row
//! lookup in legacy-parity mode); the superheated region is a constant-cp
//! vapor extension and compressed liquid is a saturated-liquid
//! approximation. All computations are synchronous and pure over immutable
//! inputs.
//!
//! # Example
//!
//! ```
//! use tc_props::{find_substance, resolve, PropertyId, ResolverOptions};
//!
//! let water = find_substance("water").unwrap();
//! let state = resolve(
//!     water,
//!     ResolverOptions::default(),
//!     (PropertyId::P, 101.4),
//!     (PropertyId::X, 1.0),
//! )
//! .unwrap();
//! assert!(state.h > 2600.0); // saturated steam
//! ```

pub mod catalog;
pub mod error;
mod ideal_gas;
pub mod property;
mod real;
pub mod resolver;
pub mod saturation;
pub mod state;
pub mod substance;

// Re-exports for ergonomics
pub use catalog::{CatalogEntry, filter_catalog, find_substance, substance_catalog};
pub use error::{PropsError, PropsResult};
pub use property::{PropertyId, PropertyPair, same_pair};
pub use resolver::{RawProperty, ResolverOptions, resolve, resolve_with_units};
pub use saturation::{SaturationLookup, SaturationPoint, SaturationTable};
pub use state::{SpecEnergy, SpecEnthalpy, SpecEntropy, SpecVolume, StatePoint};
pub use substance::{IdealGasCoeffs, Substance, SubstanceModel};
