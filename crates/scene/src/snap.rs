//! Nearest-star snapping for clicks in either view.
//!
//! Ordering contract:
//! - The smallest squared distance wins.
//! - Distances equal within `TIE_EPSILON` (relative) go to the lower index, so
//!   results depend only on store order, never on rounding noise.
//! - A tied hit reports the smallest distance among the tied candidates.

use core::cmp::Ordering;

use foundation::math::{Pixel, Vec2, tolerant_cmp_f64};

use crate::config::DEFAULT_SNAP_TOLERANCE;
use crate::point::{PointIndex, StarPoint};
use crate::projection::ScreenProjector;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NearestHit {
    pub index: PointIndex,
    pub distance_sq: f64,
}

/// Snap radius; compared against squared distances.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SnapTolerance {
    pub radius: f64,
}

impl Default for SnapTolerance {
    fn default() -> Self {
        Self::new(DEFAULT_SNAP_TOLERANCE)
    }
}

impl SnapTolerance {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn accepts(&self, hit: &NearestHit) -> bool {
        is_within_tolerance(hit.distance_sq, self.radius)
    }
}

pub fn is_within_tolerance(distance_sq: f64, tolerance_radius: f64) -> bool {
    distance_sq <= tolerance_radius * tolerance_radius
}

/// Linear scan for the candidate closest to `query`.
///
/// `distance_sq` returns `None` for candidates that cannot be compared (they
/// are skipped). An empty or fully skipped candidate set yields `None`.
pub fn find_nearest<Q, T, F>(query: &Q, candidates: &[T], mut distance_sq: F) -> Option<NearestHit>
where
    F: FnMut(&Q, &T) -> Option<f64>,
{
    let mut best: Option<NearestHit> = None;
    for (i, candidate) in candidates.iter().enumerate() {
        let Some(d2) = distance_sq(query, candidate) else {
            continue;
        };
        if d2.is_nan() {
            continue;
        }
        let candidate = NearestHit {
            index: PointIndex(i),
            distance_sq: d2,
        };
        best = Some(match best {
            None => candidate,
            Some(b) => match tolerant_cmp_f64(d2, b.distance_sq) {
                Ordering::Less => candidate,
                // Tied: the lower index stays, carrying the smaller distance.
                Ordering::Equal => NearestHit {
                    distance_sq: b.distance_sq.min(d2),
                    ..b
                },
                Ordering::Greater => b,
            },
        });
    }
    best
}

/// Nearest star by texel distance in the 2D view.
pub fn nearest_by_pixel(stars: &[StarPoint], click: Pixel) -> Option<NearestHit> {
    find_nearest(&click.as_vec2(), stars, |q, star| {
        Some(q.distance_sq(star.pixel().as_vec2()))
    })
}

/// Nearest star by screen distance in the 3D view, using the current camera.
pub fn nearest_on_screen(
    stars: &[StarPoint],
    click: Vec2,
    projector: &dyn ScreenProjector,
) -> Option<NearestHit> {
    find_nearest(&click, stars, |q, star| {
        projector
            .project(star.position())
            .map(|screen| q.distance_sq(screen))
    })
}
