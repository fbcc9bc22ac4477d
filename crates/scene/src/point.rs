use foundation::math::{EquirectGrid, Pixel, Spherical, Vec3, spherical_to_cartesian};

/// Stable identity of a star: its position in creation order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointIndex(pub usize);

impl PointIndex {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A star on the sphere.
///
/// Fields are derived together in [`StarPoint::new`] and never change, so
/// `position` and `pixel` always agree with `direction` and `offset`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StarPoint {
    position: Vec3,
    offset: f64,
    direction: Spherical,
    pixel: Pixel,
}

impl StarPoint {
    pub fn new(direction: Spherical, offset: f64, base_radius: f64, grid: &EquirectGrid) -> Self {
        Self {
            position: spherical_to_cartesian(base_radius + offset, direction),
            offset,
            direction,
            pixel: grid.to_pixel(direction),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn direction(&self) -> Spherical {
        self.direction
    }

    pub fn polar(&self) -> f64 {
        self.direction.polar
    }

    pub fn azimuth(&self) -> f64 {
        self.direction.azimuth
    }

    pub fn pixel(&self) -> Pixel {
        self.pixel
    }
}
