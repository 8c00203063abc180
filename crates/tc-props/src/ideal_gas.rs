//! Closed-form ideal-gas state resolution.

use crate::error::{PropsError, PropsResult};
use crate::property::PropertyId;
use crate::state::StatePoint;
use crate::substance::IdealGasCoeffs;
use tc_core::numeric::Real;
use tc_core::units::c_to_k;

/// Resolve a state from pressure [kPa] and temperature [°C].
///
/// Internal energy is referenced to u = 0 at 0 K. Entropy carries no
/// reference state; only entropy differences are meaningful.
pub(crate) fn resolve_pt(gas: &IdealGasCoeffs, p: Real, t_c: Real) -> PropsResult<StatePoint> {
    // The closed form takes ln(P) and divides by P; non-positive values
    // would produce NaN rather than fail
    if p <= 0.0 {
        return Err(PropsError::OutOfRange {
            prop: PropertyId::P,
            value: p,
        });
    }
    let t_k = c_to_k(t_c);
    if t_k <= 0.0 {
        return Err(PropsError::OutOfRange {
            prop: PropertyId::T,
            value: t_c,
        });
    }

    let r = gas.gas_constant()?;
    let cv = gas.cv()?;
    let cp = gas.cp()?;

    let v = r * t_k / p;
    let u = cv * t_k;
    let h = u + p * v;
    let s = cp * t_k.ln() - r * p.ln();

    Ok(StatePoint {
        p,
        t: t_c,
        v,
        u,
        h,
        s,
        x: None,
    })
}
