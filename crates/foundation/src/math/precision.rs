//! Deterministic float ordering.
//!
//! Nearest-point queries compare squared distances; these helpers give them a
//! total, reproducible order so ties and NaNs never depend on scan accidents.

use core::cmp::Ordering;

/// Relative tolerance under which two squared distances count as equal.
pub const TIE_EPSILON: f64 = 1e-9;

/// Canonicalize a floating-point value for deterministic ordering.
///
/// Rules:
/// - `-0.0` becomes `0.0`
/// - all NaNs become a single canonical NaN
pub fn canonical_f64(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else if v.is_nan() {
        f64::NAN
    } else {
        v
    }
}

/// Deterministic total ordering for floats.
pub fn stable_total_cmp_f64(a: f64, b: f64) -> Ordering {
    canonical_f64(a).total_cmp(&canonical_f64(b))
}

/// Compares two non-negative magnitudes, treating values within
/// [`TIE_EPSILON`] (relative, floored at an absolute scale of 1) as equal.
pub fn tolerant_cmp_f64(a: f64, b: f64) -> Ordering {
    let scale = a.abs().max(b.abs()).max(1.0);
    if (a - b).abs() <= TIE_EPSILON * scale {
        Ordering::Equal
    } else {
        stable_total_cmp_f64(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::{canonical_f64, stable_total_cmp_f64, tolerant_cmp_f64};
    use core::cmp::Ordering;

    #[test]
    fn canonicalizes_negative_zero() {
        assert_eq!(canonical_f64(-0.0), 0.0);
        assert_eq!(canonical_f64(0.0), 0.0);
    }

    #[test]
    fn stable_cmp_is_total_and_deterministic() {
        assert_eq!(stable_total_cmp_f64(1.0, 2.0), Ordering::Less);
        assert_eq!(stable_total_cmp_f64(-0.0, 0.0), Ordering::Equal);
        assert_eq!(stable_total_cmp_f64(f64::NAN, f64::NAN), Ordering::Equal);
    }

    #[test]
    fn tolerant_cmp_absorbs_rounding_noise() {
        let a = 0.1 + 0.2;
        let b = 0.3;
        assert_ne!(a, b);
        assert_eq!(tolerant_cmp_f64(a, b), Ordering::Equal);
        assert_eq!(tolerant_cmp_f64(34.0, 35.0), Ordering::Less);
        assert_eq!(tolerant_cmp_f64(1e12, 1e12 + 1.0), Ordering::Equal);
    }
}
