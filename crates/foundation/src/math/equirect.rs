//! Equirectangular mapping between sphere directions and a square texel grid.
//!
//! Columns are linear in azimuth, rows linear in polar angle, with row 0 at the
//! north pole. Both axes span `size - 1` steps so the last column/row sits on
//! the `2π` / `π` seam.

use std::f64::consts::{PI, TAU};

use super::{Spherical, Vec2};

/// Added before flooring so a texel's own inverse-mapped angles land back on it.
const SNAP_EPSILON: f64 = 1e-9;

/// Integer texel coordinate; `x` is the column, `y` the row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
}

impl Pixel {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x as f64, self.y as f64)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EquirectGrid {
    size: u32,
}

impl EquirectGrid {
    /// Returns `None` when `size < 2`; the mapping divides by `size - 1`.
    pub fn new(size: u32) -> Option<Self> {
        (size >= 2).then_some(Self { size })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    fn span(&self) -> f64 {
        (self.size - 1) as f64
    }

    fn quantize(&self, t: f64) -> u32 {
        (t * self.span() + SNAP_EPSILON)
            .floor()
            .clamp(0.0, self.span()) as u32
    }

    pub fn to_pixel(&self, dir: Spherical) -> Pixel {
        let u = dir.azimuth / TAU;
        let v = dir.polar / PI;
        Pixel::new(self.quantize(u), self.quantize(v))
    }

    pub fn to_spherical(&self, pixel: Pixel) -> Spherical {
        let u = pixel.x as f64 / self.span();
        let v = pixel.y as f64 / self.span();
        Spherical::new(v * PI, u * TAU)
    }

    /// Maps continuous image coordinates to the texel under them.
    ///
    /// Returns `None` for non-finite input or coordinates outside `[0, size)`.
    pub fn pixel_at(&self, coords: Vec2) -> Option<Pixel> {
        if !coords.is_finite() {
            return None;
        }
        let limit = self.size as f64;
        if coords.x < 0.0 || coords.y < 0.0 || coords.x >= limit || coords.y >= limit {
            return None;
        }
        Some(Pixel::new(coords.x.floor() as u32, coords.y.floor() as u32))
    }

    /// Angular width of one texel step as `(polar, azimuth)`.
    pub fn step(&self) -> (f64, f64) {
        (PI / self.span(), TAU / self.span())
    }
}
