use foundation::math::Vec3;

use crate::point::{PointIndex, StarPoint};

/// Append-only, creation-ordered list of stars.
///
/// Both views read from here; indices handed out by [`PointStore::add`] stay
/// valid for the life of the store.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<StarPoint>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, point: StarPoint) -> PointIndex {
        let index = PointIndex(self.points.len());
        self.points.push(point);
        index
    }

    pub fn all(&self) -> &[StarPoint] {
        &self.points
    }

    pub fn get(&self, index: PointIndex) -> Option<&StarPoint> {
        self.points.get(index.0)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 3D scatter positions in index order.
    pub fn positions(&self) -> Vec<Vec3> {
        self.points.iter().map(StarPoint::position).collect()
    }
}

impl Extend<StarPoint> for PointStore {
    fn extend<I: IntoIterator<Item = StarPoint>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}
