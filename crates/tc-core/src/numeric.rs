//! Scalar type and numeric helpers shared across the engine.

use crate::TcError;

/// Floating point type used throughout the engine.
pub type Real = f64;

/// Absolute/relative comparison tolerances.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

/// Tolerance-based equality: absolute for values near zero, relative
/// otherwise.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Linear interpolation between `a` and `b` at weight `w` in [0, 1].
/// Exact at both endpoints: `lerp(a, b, 0.0) == a` and `lerp(a, b, 1.0) == b`.
#[inline]
pub fn lerp(a: Real, b: Real, w: Real) -> Real {
    (1.0 - w) * a + w * b
}

/// Reject NaN and infinities at the input boundary.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TcError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn nearly_equal_scales_with_magnitude() {
        let tol = Tolerances::default();
        assert!(nearly_equal(3000.0, 3000.0 + 1e-6, tol));
        assert!(!nearly_equal(3000.0, 3000.1, tol));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(100.0, 200.0, 0.0), 100.0);
        assert_eq!(lerp(100.0, 200.0, 1.0), 200.0);
        assert_eq!(lerp(100.0, 200.0, 0.5), 150.0);
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
        assert!(ensure_finite(Real::INFINITY, "test").is_err());
        assert_eq!(ensure_finite(1.5, "test").unwrap(), 1.5);
    }
}
