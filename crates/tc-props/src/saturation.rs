//! Saturation tables and lookup.
//!
//! Tables are small fixed arrays (≤8 rows per substance), ordered by
//! ascending pressure and temperature, with the critical point as the final
//! row (f- and g-values coincide there).
//!
//! Two lookup modes exist: linear interpolation between bracketing rows
//! (default), and nearest-row-by-absolute-difference for exact parity with
//! legacy outputs. At a query value exactly equal to a table row the modes
//! agree.

use crate::error::{PropsError, PropsResult};
use serde::{Deserialize, Serialize};
use tc_core::numeric::{Real, lerp};

/// One row of a saturation table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaturationPoint {
    /// Saturation pressure [kPa]
    pub p: Real,
    /// Saturation temperature [°C]
    pub t: Real,
    /// Saturated liquid / vapor specific volume [m³/kg]
    pub vf: Real,
    pub vg: Real,
    /// Saturated liquid / vapor enthalpy [kJ/kg]
    pub hf: Real,
    pub hg: Real,
    /// Saturated liquid / vapor entropy [kJ/(kg·K)]
    pub sf: Real,
    pub sg: Real,
    /// Saturated liquid / vapor internal energy [kJ/kg]
    pub uf: Real,
    pub ug: Real,
}

/// How to map a queried pressure/temperature onto the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaturationLookup {
    /// Linear interpolation between bracketing rows, clamped at table ends.
    #[default]
    Interpolate,
    /// Nearest row by absolute difference; ties resolve to the first row.
    NearestRow,
}

/// An ordered, immutable saturation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationTable {
    rows: &'static [SaturationPoint],
}

impl SaturationTable {
    pub const fn new(rows: &'static [SaturationPoint]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &'static [SaturationPoint] {
        self.rows
    }

    /// The final row, where liquid and vapor properties coincide.
    pub fn critical_point(&self) -> Option<&'static SaturationPoint> {
        self.rows.last()
    }

    /// Saturation properties at the given pressure [kPa].
    pub fn at_pressure(&self, p: Real, lookup: SaturationLookup) -> PropsResult<SaturationPoint> {
        self.locate(p, lookup, |row| row.p)
    }

    /// Saturation properties at the given temperature [°C].
    pub fn at_temperature(&self, t: Real, lookup: SaturationLookup) -> PropsResult<SaturationPoint> {
        self.locate(t, lookup, |row| row.t)
    }

    fn locate(
        &self,
        query: Real,
        lookup: SaturationLookup,
        key: impl Fn(&SaturationPoint) -> Real,
    ) -> PropsResult<SaturationPoint> {
        if self.rows.is_empty() {
            return Err(PropsError::NoSaturationData);
        }
        match lookup {
            SaturationLookup::NearestRow => Ok(self.nearest(query, key)),
            SaturationLookup::Interpolate => Ok(self.interpolated(query, key)),
        }
    }

    fn nearest(&self, query: Real, key: impl Fn(&SaturationPoint) -> Real) -> SaturationPoint {
        // min_by keeps the first row on ties
        *self
            .rows
            .iter()
            .min_by(|a, b| {
                (key(a) - query)
                    .abs()
                    .total_cmp(&(key(b) - query).abs())
            })
            .unwrap_or(&self.rows[0])
    }

    fn interpolated(&self, query: Real, key: impl Fn(&SaturationPoint) -> Real) -> SaturationPoint {
        let first = &self.rows[0];
        let last = &self.rows[self.rows.len() - 1];
        if query <= key(first) {
            return *first;
        }
        if query >= key(last) {
            return *last;
        }
        for pair in self.rows.windows(2) {
            let (lo, hi) = (&pair[0], &pair[1]);
            if query >= key(lo) && query <= key(hi) {
                let span = key(hi) - key(lo);
                if span <= 0.0 {
                    return *lo;
                }
                let w = (query - key(lo)) / span;
                return lerp_rows(lo, hi, w);
            }
        }
        // Ordered table guarantees a bracketing window above
        *last
    }

    /// Check the table invariant: ascending P and T, critical point last.
    pub fn validate(&self) -> PropsResult<()> {
        if self.rows.is_empty() {
            return Err(PropsError::NoSaturationData);
        }
        for pair in self.rows.windows(2) {
            if pair[1].p <= pair[0].p || pair[1].t <= pair[0].t {
                return Err(PropsError::InvalidTable {
                    what: "rows must ascend in both P and T",
                });
            }
        }
        Ok(())
    }
}

fn lerp_rows(a: &SaturationPoint, b: &SaturationPoint, w: Real) -> SaturationPoint {
    SaturationPoint {
        p: lerp(a.p, b.p, w),
        t: lerp(a.t, b.t, w),
        vf: lerp(a.vf, b.vf, w),
        vg: lerp(a.vg, b.vg, w),
        hf: lerp(a.hf, b.hf, w),
        hg: lerp(a.hg, b.hg, w),
        sf: lerp(a.sf, b.sf, w),
        sg: lerp(a.sg, b.sg, w),
        uf: lerp(a.uf, b.uf, w),
        ug: lerp(a.ug, b.ug, w),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: [SaturationPoint; 3] = [
        SaturationPoint {
            p: 100.0,
            t: 100.0,
            vf: 0.001,
            vg: 1.6,
            hf: 420.0,
            hg: 2675.0,
            sf: 1.3,
            sg: 7.3,
            uf: 419.0,
            ug: 2506.0,
        },
        SaturationPoint {
            p: 500.0,
            t: 150.0,
            vf: 0.0011,
            vg: 0.4,
            hf: 632.0,
            hg: 2746.0,
            sf: 1.8,
            sg: 6.8,
            uf: 631.0,
            ug: 2559.0,
        },
        SaturationPoint {
            p: 1500.0,
            t: 200.0,
            vf: 0.0012,
            vg: 0.13,
            hf: 852.0,
            hg: 2792.0,
            sf: 2.3,
            sg: 6.4,
            uf: 850.0,
            ug: 2594.0,
        },
    ];

    const TABLE: SaturationTable = SaturationTable::new(&ROWS);

    #[test]
    fn nearest_row_by_pressure() {
        let row = TABLE.at_pressure(120.0, SaturationLookup::NearestRow).unwrap();
        assert_eq!(row.t, 100.0);

        let row = TABLE.at_pressure(900.0, SaturationLookup::NearestRow).unwrap();
        assert_eq!(row.t, 150.0);
    }

    #[test]
    fn nearest_tie_takes_first_row() {
        let row = TABLE.at_pressure(300.0, SaturationLookup::NearestRow).unwrap();
        assert_eq!(row.t, 100.0);
    }

    #[test]
    fn interpolation_at_exact_row_matches_nearest() {
        let a = TABLE.at_pressure(500.0, SaturationLookup::Interpolate).unwrap();
        let b = TABLE.at_pressure(500.0, SaturationLookup::NearestRow).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn interpolation_blends_between_rows() {
        let row = TABLE.at_pressure(300.0, SaturationLookup::Interpolate).unwrap();
        assert!((row.t - 125.0).abs() < 1e-9);
        assert!((row.hf - 526.0).abs() < 1e-9);
    }

    #[test]
    fn interpolation_clamps_outside_table() {
        let low = TABLE.at_pressure(1.0, SaturationLookup::Interpolate).unwrap();
        assert_eq!(low.t, 100.0);

        let high = TABLE.at_pressure(99999.0, SaturationLookup::Interpolate).unwrap();
        assert_eq!(high.t, 200.0);
    }

    #[test]
    fn lookup_by_temperature() {
        let row = TABLE.at_temperature(175.0, SaturationLookup::Interpolate).unwrap();
        assert!((row.p - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn validate_accepts_ordered_table() {
        assert!(TABLE.validate().is_ok());
    }

    #[test]
    fn empty_table_is_an_error() {
        const EMPTY: SaturationTable = SaturationTable::new(&[]);
        assert!(matches!(
            EMPTY.at_pressure(100.0, SaturationLookup::NearestRow),
            Err(PropsError::NoSaturationData)
        ));
    }
}
