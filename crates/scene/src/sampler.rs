use std::f64::consts::TAU;

use foundation::math::{EquirectGrid, Spherical};
use rand::Rng;

use crate::config::OffsetRange;
use crate::point::StarPoint;

/// Draws stars uniformly over the sphere surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SphereSampler {
    base_radius: f64,
    offsets: OffsetRange,
    grid: EquirectGrid,
}

impl SphereSampler {
    pub fn new(base_radius: f64, offsets: OffsetRange, grid: EquirectGrid) -> Self {
        Self {
            base_radius,
            offsets,
            grid,
        }
    }

    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    pub fn offsets(&self) -> OffsetRange {
        self.offsets
    }

    pub fn grid(&self) -> &EquirectGrid {
        &self.grid
    }

    /// Uniform direction by inverse-CDF sampling.
    ///
    /// `cos θ` must be uniform in `[-1, 1]` for equal density per unit area;
    /// a uniform θ would crowd the poles.
    pub fn sample_direction<R: Rng + ?Sized>(rng: &mut R) -> Spherical {
        let u1: f64 = rng.r#gen();
        let u2: f64 = rng.r#gen();
        Spherical::new((1.0 - 2.0 * u1).clamp(-1.0, 1.0).acos(), TAU * u2)
    }

    /// Star at `direction` with a freshly drawn offset.
    pub fn star_towards<R: Rng + ?Sized>(&self, direction: Spherical, rng: &mut R) -> StarPoint {
        let offset = self.offsets.sample(rng);
        StarPoint::new(direction, offset, self.base_radius, &self.grid)
    }

    pub fn sample_one<R: Rng + ?Sized>(&self, rng: &mut R) -> StarPoint {
        let direction = Self::sample_direction(rng);
        self.star_towards(direction, rng)
    }

    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<StarPoint> {
        (0..count).map(|_| self.sample_one(rng)).collect()
    }
}
