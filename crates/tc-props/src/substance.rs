//! Substance definitions: ideal-gas coefficients or saturation tables.

use crate::error::{PropsError, PropsResult};
use crate::property::{PropertyId, PropertyPair};
use crate::saturation::SaturationTable;
use tc_core::numeric::Real;

/// Coefficients of a calorically perfect ideal gas.
///
/// All fields are optional: published gas data is often partial, and each
/// calculation demands only the coefficients it actually needs (absent ones
/// fail with [`PropsError::MissingPropertyData`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealGasCoeffs {
    /// Molar mass [kg/kmol]
    pub molar_mass: Option<Real>,
    /// Specific gas constant [kJ/(kg·K)]
    pub r: Option<Real>,
    /// Specific heat at constant pressure [kJ/(kg·K)]
    pub cp: Option<Real>,
    /// Specific heat at constant volume [kJ/(kg·K)]
    pub cv: Option<Real>,
    /// Heat capacity ratio cp/cv
    pub gamma: Option<Real>,
}

impl IdealGasCoeffs {
    pub fn gas_constant(&self) -> PropsResult<Real> {
        self.r
            .ok_or(PropsError::MissingPropertyData { what: "R" })
    }

    pub fn cp(&self) -> PropsResult<Real> {
        self.cp
            .ok_or(PropsError::MissingPropertyData { what: "cp" })
    }

    pub fn cv(&self) -> PropsResult<Real> {
        self.cv
            .ok_or(PropsError::MissingPropertyData { what: "cv" })
    }

    pub fn gamma(&self) -> PropsResult<Real> {
        self.gamma
            .ok_or(PropsError::MissingPropertyData { what: "gamma" })
    }
}

/// The property model backing a substance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubstanceModel {
    /// Closed-form equation of state.
    IdealGas(IdealGasCoeffs),
    /// Saturation-table-based, phase-aware model.
    Real(SaturationTable),
}

/// An immutable substance definition.
///
/// Loaded once from the static catalog, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Substance {
    pub id: &'static str,
    pub model: SubstanceModel,
}

/// The only pair the closed-form ideal-gas model resolves.
const IDEAL_GAS_PAIRS: [PropertyPair; 1] = [(PropertyId::P, PropertyId::T)];

/// Input pairs the saturation-table model resolves.
const REAL_PAIRS: [PropertyPair; 5] = [
    (PropertyId::P, PropertyId::T),
    (PropertyId::P, PropertyId::X),
    (PropertyId::P, PropertyId::S),
    (PropertyId::T, PropertyId::X),
    (PropertyId::T, PropertyId::S),
];

impl Substance {
    pub fn is_ideal_gas(&self) -> bool {
        matches!(self.model, SubstanceModel::IdealGas(_))
    }

    pub fn is_real(&self) -> bool {
        matches!(self.model, SubstanceModel::Real(_))
    }

    pub fn ideal_gas(&self) -> Option<&IdealGasCoeffs> {
        match &self.model {
            SubstanceModel::IdealGas(gas) => Some(gas),
            SubstanceModel::Real(_) => None,
        }
    }

    pub fn saturation(&self) -> Option<&SaturationTable> {
        match &self.model {
            SubstanceModel::Real(table) => Some(table),
            SubstanceModel::IdealGas(_) => None,
        }
    }

    /// Input pairs this substance can resolve, queryable up front instead of
    /// by trial and error.
    pub fn supported_pairs(&self) -> &'static [PropertyPair] {
        match self.model {
            SubstanceModel::IdealGas(_) => &IDEAL_GAS_PAIRS,
            SubstanceModel::Real(_) => &REAL_PAIRS,
        }
    }
}
