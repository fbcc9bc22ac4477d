use std::f64::consts::{PI, TAU};

use foundation::math::{Spherical, Vec3, spherical_to_cartesian};

/// Grid resolution the 3D view uses for the translucent base sphere.
pub const DEFAULT_SPHERE_RESOLUTION: usize = 60;

/// Latitude/longitude grid over the base sphere, for drawing it as a
/// translucent surface behind the stars.
///
/// `rows[j][i]` is the vertex at azimuth step `j` and polar step `i`; both
/// ranges include their end points, so the first and last rows coincide.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereWireframe {
    pub rows: Vec<Vec<Vec3>>,
}

impl SphereWireframe {
    pub fn vertex_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

fn linspace(end: f64, steps: usize) -> impl Iterator<Item = f64> {
    let denom = steps.saturating_sub(1).max(1) as f64;
    (0..steps).map(move |i| end * i as f64 / denom)
}

pub fn reference_sphere(radius: f64, resolution: usize) -> SphereWireframe {
    let rows = linspace(TAU, resolution)
        .map(|azimuth| {
            linspace(PI, resolution)
                .map(|polar| spherical_to_cartesian(radius, Spherical::new(polar, azimuth)))
                .collect()
        })
        .collect();
    SphereWireframe { rows }
}
