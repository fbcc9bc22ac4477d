use std::f64::consts::{PI, TAU};

use super::Vec3;

/// Direction on a sphere in radians.
///
/// `polar` is measured from the +Z pole (0..=π), `azimuth` counter-clockwise
/// from +X in the XY plane (0..2π).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spherical {
    pub polar: f64,
    pub azimuth: f64,
}

impl Spherical {
    pub fn new(polar: f64, azimuth: f64) -> Self {
        Self { polar, azimuth }
    }
}

pub fn spherical_to_cartesian(radius: f64, dir: Spherical) -> Vec3 {
    let (sin_t, cos_t) = dir.polar.sin_cos();
    let (sin_p, cos_p) = dir.azimuth.sin_cos();
    Vec3::new(
        radius * sin_t * cos_p,
        radius * sin_t * sin_p,
        radius * cos_t,
    )
}

/// Returns `(radius, direction)`, or `None` for the origin.
///
/// The azimuth is wrapped into `[0, 2π)`.
pub fn cartesian_to_spherical(p: Vec3) -> Option<(f64, Spherical)> {
    let r = p.length();
    if r <= 0.0 || !r.is_finite() {
        return None;
    }
    let polar = (p.z / r).clamp(-1.0, 1.0).acos();
    let mut azimuth = p.y.atan2(p.x);
    if azimuth < 0.0 {
        azimuth += TAU;
    }
    if azimuth >= TAU {
        azimuth -= TAU;
    }
    Some((r, Spherical::new(polar.clamp(0.0, PI), azimuth)))
}

#[cfg(test)]
mod tests {
    use super::{Spherical, cartesian_to_spherical, spherical_to_cartesian};
    use crate::math::Vec3;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn poles_and_equator() {
        let north = spherical_to_cartesian(10.0, Spherical::new(0.0, 1.3));
        assert_close(north.z, 10.0, 1e-12);
        assert_close(north.x, 0.0, 1e-12);

        let east = spherical_to_cartesian(2.0, Spherical::new(FRAC_PI_2, FRAC_PI_2));
        assert_close(east.x, 0.0, 1e-12);
        assert_close(east.y, 2.0, 1e-12);
        assert_close(east.z, 0.0, 1e-12);
    }

    #[test]
    fn round_trip_wraps_negative_azimuth() {
        let p = Vec3::new(1.0, -1.0, 0.5);
        let (r, dir) = cartesian_to_spherical(p).expect("non-zero");
        assert!(dir.azimuth >= 0.0 && dir.azimuth < 2.0 * PI);
        let back = spherical_to_cartesian(r, dir);
        assert_close(back.x, p.x, 1e-12);
        assert_close(back.y, p.y, 1e-12);
        assert_close(back.z, p.z, 1e-12);
    }

    #[test]
    fn origin_has_no_direction() {
        assert!(cartesian_to_spherical(Vec3::ZERO).is_none());
    }
}
