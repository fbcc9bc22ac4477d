use foundation::math::{Pixel, Vec3};

use crate::point::PointIndex;
use crate::store::PointStore;

/// What both views mark for the selected star.
///
/// Always taken from the stored star, never from the click that selected it,
/// so the 3D and 2D markers agree.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Highlight {
    pub index: PointIndex,
    pub position: Vec3,
    pub pixel: Pixel,
}

/// The currently highlighted star, if any.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<PointIndex>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<PointIndex> {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Returns `true` if the selection changed.
    pub fn select(&mut self, index: PointIndex) -> bool {
        self.current.replace(index) != Some(index)
    }

    /// Returns `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn highlight(&self, store: &PointStore) -> Option<Highlight> {
        let index = self.current?;
        let star = store.get(index)?;
        Some(Highlight {
            index,
            position: star.position(),
            pixel: star.pixel(),
        })
    }
}
