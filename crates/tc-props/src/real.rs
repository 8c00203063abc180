//! Region-aware state resolution for real substances.
//!
//! The model is deliberately coarse: saturation rows fix the dome, the
//! superheated region is a constant-cp vapor extension from the saturation
//! line, and compressed liquid is approximated by the saturated-liquid row.
//! All branches derive u = h − P·v; tabulated uf/ug are data, not inputs.

use crate::error::{PropsError, PropsResult};
use crate::property::PropertyId;
use crate::saturation::{SaturationLookup, SaturationPoint, SaturationTable};
use crate::state::StatePoint;
use tc_core::numeric::Real;
use tc_core::units::{c_to_k, k_to_c};

/// Vapor specific heat for the superheated extension [kJ/(kg·K)].
/// A fixed steam-like approximation.
pub(crate) const CP_VAPOR: Real = 2.0;

pub(crate) fn resolve(
    table: &SaturationTable,
    lookup: SaturationLookup,
    first: (PropertyId, Real),
    second: (PropertyId, Real),
) -> PropsResult<StatePoint> {
    use PropertyId::{P, S, T, X};

    let value_of = |id: PropertyId| -> Option<Real> {
        if first.0 == id {
            Some(first.1)
        } else if second.0 == id {
            Some(second.1)
        } else {
            None
        }
    };

    let (p, t, s, x) = (value_of(P), value_of(T), value_of(S), value_of(X));

    match (p, t, s, x) {
        (Some(p), Some(t), None, None) => resolve_pt(table, lookup, p, t),
        (Some(p), None, None, Some(x)) => resolve_px(table, lookup, p, x),
        (Some(p), None, Some(s), None) => resolve_ps(table, lookup, p, s),
        (None, Some(t), None, Some(x)) => resolve_tx(table, lookup, t, x),
        (None, Some(t), Some(s), None) => resolve_ts(table, lookup, t, s),
        _ => Err(PropsError::UnsupportedPair {
            first: first.0,
            second: second.0,
        }),
    }
}

/// Close a branch: derive internal energy and assemble the state.
fn finish(p: Real, t: Real, v: Real, h: Real, s: Real, x: Option<Real>) -> StatePoint {
    let u = h - p * v;
    StatePoint { p, t, v, u, h, s, x }
}

/// Quality-weighted blend across the dome.
fn mixture(sat: &SaturationPoint, x: Real) -> (Real, Real, Real) {
    let v = sat.vf + x * (sat.vg - sat.vf);
    let h = sat.hf + x * (sat.hg - sat.hf);
    let s = sat.sf + x * (sat.sg - sat.sf);
    (v, h, s)
}

/// Superheated vapor properties at temperature `t` above the saturation
/// reference `sat`.
fn superheated(sat: &SaturationPoint, t: Real) -> (Real, Real, Real) {
    let ratio = c_to_k(t) / c_to_k(sat.t);
    let h = sat.hg + CP_VAPOR * (t - sat.t);
    let s = sat.sg + CP_VAPOR * ratio.ln();
    let v = sat.vg * ratio;
    (v, h, s)
}

fn resolve_pt(
    table: &SaturationTable,
    lookup: SaturationLookup,
    p: Real,
    t: Real,
) -> PropsResult<StatePoint> {
    let sat = table.at_pressure(p, lookup)?;

    if t > sat.t {
        tracing::debug!(p, t, t_sat = sat.t, "superheated region");
        let (v, h, s) = superheated(&sat, t);
        Ok(finish(p, t, v, h, s, None))
    } else if t < sat.t {
        // Compressed liquid, approximated as saturated liquid at T
        let sat_t = table.at_temperature(t, lookup)?;
        Ok(finish(p, t, sat_t.vf, sat_t.hf, sat_t.sf, None))
    } else {
        Err(PropsError::AmbiguousMixture)
    }
}

fn resolve_px(
    table: &SaturationTable,
    lookup: SaturationLookup,
    p: Real,
    x: Real,
) -> PropsResult<StatePoint> {
    check_quality(x)?;
    let sat = table.at_pressure(p, lookup)?;
    let (v, h, s) = mixture(&sat, x);
    Ok(finish(p, sat.t, v, h, s, Some(x)))
}

fn resolve_tx(
    table: &SaturationTable,
    lookup: SaturationLookup,
    t: Real,
    x: Real,
) -> PropsResult<StatePoint> {
    check_quality(x)?;
    let sat = table.at_temperature(t, lookup)?;
    let (v, h, s) = mixture(&sat, x);
    Ok(finish(sat.p, sat.t, v, h, s, Some(x)))
}

fn resolve_ps(
    table: &SaturationTable,
    lookup: SaturationLookup,
    p: Real,
    s: Real,
) -> PropsResult<StatePoint> {
    let sat = table.at_pressure(p, lookup)?;

    if s >= sat.sf && s <= sat.sg {
        let x = quality_from_entropy(&sat, s);
        let (v, h, _) = mixture(&sat, x);
        Ok(finish(p, sat.t, v, h, s, Some(x)))
    } else if s > sat.sg {
        // Invert s = sg + cp_v·ln(T/T_sat) for the superheat temperature
        let t = k_to_c(c_to_k(sat.t) * ((s - sat.sg) / CP_VAPOR).exp());
        let (v, h, _) = superheated(&sat, t);
        Ok(finish(p, t, v, h, s, None))
    } else {
        // Compressed liquid: h = hf + vf·(P − Psat); T kept at the row's
        // saturation value, a known approximation
        let h = sat.hf + sat.vf * (p - sat.p);
        Ok(finish(p, sat.t, sat.vf, h, s, None))
    }
}

fn resolve_ts(
    table: &SaturationTable,
    lookup: SaturationLookup,
    t: Real,
    s: Real,
) -> PropsResult<StatePoint> {
    let sat = table.at_temperature(t, lookup)?;

    if s >= sat.sf && s <= sat.sg {
        let x = quality_from_entropy(&sat, s);
        let (v, h, _) = mixture(&sat, x);
        Ok(finish(sat.p, sat.t, v, h, s, Some(x)))
    } else if s > sat.sg {
        // The supplied temperature selects the saturation isobar; the
        // superheat temperature is recovered from the entropy, as in (P,s)
        let t_super = k_to_c(c_to_k(sat.t) * ((s - sat.sg) / CP_VAPOR).exp());
        let (v, h, _) = superheated(&sat, t_super);
        Ok(finish(sat.p, t_super, v, h, s, None))
    } else {
        Err(PropsError::NotImplemented {
            what: "compressed-liquid resolution from (T, s)",
        })
    }
}

fn check_quality(x: Real) -> PropsResult<()> {
    if !(0.0..=1.0).contains(&x) {
        return Err(PropsError::InvalidQuality { x });
    }
    Ok(())
}

fn quality_from_entropy(sat: &SaturationPoint, s: Real) -> Real {
    let span = sat.sg - sat.sf;
    if span <= 0.0 {
        // Critical row: the dome has collapsed
        return 0.0;
    }
    (s - sat.sf) / span
}
