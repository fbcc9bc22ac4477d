use foundation::math::{Ray, Vec2, Vec3};

/// Screen rectangle of the 3D view, in the same units as click coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Half-open `[0, width) × [0, height)` test; non-finite points are outside.
    pub fn contains(&self, p: Vec2) -> bool {
        p.is_finite() && p.x >= 0.0 && p.y >= 0.0 && p.x < self.width && p.y < self.height
    }
}

/// The display surface's current camera for the 3D view.
///
/// The core never stores a transform; it asks the projector at click time.
pub trait ScreenProjector {
    fn viewport(&self) -> Viewport;

    /// Screen position of a world point, or `None` when it is not visible
    /// (for example behind the camera).
    fn project(&self, world: Vec3) -> Option<Vec2>;

    /// World-space ray under a screen position.
    ///
    /// Only needed when 3D-view insertion is enabled.
    fn unproject(&self, _screen: Vec2) -> Option<Ray> {
        None
    }
}
