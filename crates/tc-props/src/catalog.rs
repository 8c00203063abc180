//! Static substance catalog.
//!
//! Small illustrative saturation tables (not exhaustive or high-precision);
//! the final row of each table is the critical point.

use crate::saturation::{SaturationPoint, SaturationTable};
use crate::substance::{IdealGasCoeffs, Substance, SubstanceModel};

const WATER_SATURATION: [SaturationPoint; 8] = [
    SaturationPoint { p: 1.228, t: 10.0, vf: 0.001000, vg: 106.3, hf: 42.02, hg: 2519.2, sf: 0.1511, sg: 9.155, uf: 42.0, ug: 2388.7 },
    SaturationPoint { p: 12.35, t: 50.0, vf: 0.001012, vg: 12.03, hf: 209.3, hg: 2591.3, sf: 0.7038, sg: 8.074, uf: 209.3, ug: 2442.9 },
    SaturationPoint { p: 101.4, t: 100.0, vf: 0.001043, vg: 1.672, hf: 419.1, hg: 2675.6, sf: 1.3072, sg: 7.354, uf: 418.9, ug: 2506.0 },
    SaturationPoint { p: 476.2, t: 150.0, vf: 0.001091, vg: 0.3925, hf: 632.1, hg: 2745.9, sf: 1.8418, sg: 6.836, uf: 631.6, ug: 2558.9 },
    SaturationPoint { p: 1555.0, t: 200.0, vf: 0.001157, vg: 0.1272, hf: 852.2, hg: 2792.0, sf: 2.3307, sg: 6.430, uf: 850.4, ug: 2594.2 },
    SaturationPoint { p: 3976.0, t: 250.0, vf: 0.001252, vg: 0.0500, hf: 1085.9, hg: 2801.0, sf: 2.7935, sg: 6.071, uf: 1080.8, ug: 2601.8 },
    SaturationPoint { p: 8588.0, t: 300.0, vf: 0.001404, vg: 0.0216, hf: 1345.0, hg: 2749.6, sf: 3.2549, sg: 5.706, uf: 1332.9, ug: 2562.5 },
    // Critical point
    SaturationPoint { p: 22064.0, t: 373.9, vf: 0.003106, vg: 0.003106, hf: 2084.3, hg: 2084.3, sf: 4.4070, sg: 4.4070, uf: 2015.7, ug: 2015.7 },
];

const R134A_SATURATION: [SaturationPoint; 5] = [
    SaturationPoint { p: 132.82, t: -20.0, vf: 0.000736, vg: 0.1473, hf: 174.07, hg: 386.56, sf: 0.9009, sg: 1.7413, uf: 173.97, ug: 367.04 },
    SaturationPoint { p: 292.8, t: 0.0, vf: 0.000773, vg: 0.0692, hf: 200.0, hg: 398.59, sf: 1.0, sg: 1.7272, uf: 199.8, ug: 377.62 },
    SaturationPoint { p: 572.07, t: 20.0, vf: 0.000816, vg: 0.0359, hf: 225.9, hg: 409.5, sf: 1.096, sg: 1.716, uf: 225.6, ug: 387.0 },
    SaturationPoint { p: 1017.0, t: 40.0, vf: 0.000872, vg: 0.0200, hf: 256.4, hg: 419.6, sf: 1.190, sg: 1.708, uf: 255.8, ug: 395.1 },
    // Critical point
    SaturationPoint { p: 4060.4, t: 101.6, vf: 0.00196, vg: 0.00196, hf: 337.3, hg: 337.3, sf: 1.48, sg: 1.48, uf: 329.3, ug: 329.3 },
];

const AMMONIA_SATURATION: [SaturationPoint; 5] = [
    SaturationPoint { p: 190.2, t: -20.0, vf: 0.001504, vg: 0.6236, hf: 89.79, hg: 1418.0, sf: 0.3676, sg: 5.6155, uf: 88.9, ug: 1300.0 },
    SaturationPoint { p: 429.6, t: 0.0, vf: 0.001566, vg: 0.2892, hf: 179.69, hg: 1442.2, sf: 0.7114, sg: 5.3108, uf: 179.0, ug: 1319.7 },
    SaturationPoint { p: 857.5, t: 20.0, vf: 0.001638, vg: 0.1492, hf: 274.3, hg: 1460.2, sf: 1.0408, sg: 5.0861, uf: 272.9, ug: 1332.2 },
    SaturationPoint { p: 2033.5, t: 50.0, vf: 0.001777, vg: 0.0633, hf: 421.4, hg: 1471.6, sf: 1.5113, sg: 4.7644, uf: 417.8, ug: 1330.1 },
    // Critical point
    SaturationPoint { p: 11333.0, t: 132.4, vf: 0.00425, vg: 0.00425, hf: 859.0, hg: 859.0, sf: 2.85, sg: 2.85, uf: 810.0, ug: 810.0 },
];

const CO2_SATURATION: [SaturationPoint; 4] = [
    SaturationPoint { p: 1970.0, t: -20.0, vf: 0.00101, vg: 0.0195, hf: 154.5, hg: 472.5, sf: 0.811, sg: 2.015, uf: 152.5, ug: 434.3 },
    SaturationPoint { p: 3486.0, t: 0.0, vf: 0.00116, vg: 0.0101, hf: 200.0, hg: 450.0, sf: 1.0, sg: 1.83, uf: 196.0, ug: 414.0 },
    SaturationPoint { p: 5729.0, t: 20.0, vf: 0.00140, vg: 0.0053, hf: 243.6, hg: 412.0, sf: 1.16, sg: 1.65, uf: 235.6, ug: 381.8 },
    // Critical point
    SaturationPoint { p: 7377.0, t: 31.0, vf: 0.00214, vg: 0.00214, hf: 285.0, hg: 285.0, sf: 1.3, sg: 1.3, uf: 269.0, ug: 269.0 },
];

/// Air at ~300 K.
const AIR: IdealGasCoeffs = IdealGasCoeffs {
    molar_mass: Some(28.97),
    r: Some(0.287),
    cp: Some(1.005),
    cv: Some(0.718),
    gamma: Some(1.4),
};

/// A catalog entry: identifiers plus the substance definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub substance: Substance,
}

impl CatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

const SUBSTANCE_CATALOG: [CatalogEntry; 5] = [
    CatalogEntry {
        canonical_id: "H2O",
        display_name: "Water",
        aliases: &["water", "steam"],
        substance: Substance {
            id: "H2O",
            model: SubstanceModel::Real(SaturationTable::new(&WATER_SATURATION)),
        },
    },
    CatalogEntry {
        canonical_id: "R134a",
        display_name: "R-134a (Tetrafluoroethane)",
        aliases: &["tetrafluoroethane"],
        substance: Substance {
            id: "R134a",
            model: SubstanceModel::Real(SaturationTable::new(&R134A_SATURATION)),
        },
    },
    CatalogEntry {
        canonical_id: "NH3",
        display_name: "Ammonia (R-717)",
        aliases: &["ammonia", "r717"],
        substance: Substance {
            id: "NH3",
            model: SubstanceModel::Real(SaturationTable::new(&AMMONIA_SATURATION)),
        },
    },
    CatalogEntry {
        canonical_id: "CO2",
        display_name: "Carbon Dioxide (R-744)",
        aliases: &["carbon dioxide", "r744"],
        substance: Substance {
            id: "CO2",
            model: SubstanceModel::Real(SaturationTable::new(&CO2_SATURATION)),
        },
    },
    CatalogEntry {
        canonical_id: "Air",
        display_name: "Air",
        aliases: &["atmosphere"],
        substance: Substance {
            id: "Air",
            model: SubstanceModel::IdealGas(AIR),
        },
    },
];

/// The full read-only catalog.
pub fn substance_catalog() -> &'static [CatalogEntry] {
    &SUBSTANCE_CATALOG
}

/// Case-insensitive lookup by canonical id or alias. Absent keys are a
/// caller concern; no error is raised here.
pub fn find_substance(id: &str) -> Option<&'static Substance> {
    let id = id.trim().to_ascii_lowercase();
    SUBSTANCE_CATALOG
        .iter()
        .find(|entry| {
            entry.canonical_id.to_ascii_lowercase() == id
                || entry
                    .aliases
                    .iter()
                    .any(|alias| alias.to_ascii_lowercase() == id)
        })
        .map(|entry| &entry.substance)
}

/// Substring filtering over the catalog, for pickers.
pub fn filter_catalog(query: &str) -> Vec<&'static CatalogEntry> {
    SUBSTANCE_CATALOG
        .iter()
        .filter(|entry| entry.matches_query(query))
        .collect()
}
