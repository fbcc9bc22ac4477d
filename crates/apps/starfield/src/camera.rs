use foundation::math::{Ray, Vec2, Vec3};
use scene::{ScreenProjector, Viewport};

const UP: Vec3 = Vec3::new(0.0, 0.0, 1.0);
const PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_2 - 0.017;

/// Perspective camera orbiting the origin with +Z up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitCamera {
    pub yaw: f64,
    pub pitch: f64,
    pub distance: f64,
    pub fov_y: f64,
    pub viewport: Viewport,
    pub z_near: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.4,
            distance: 45.0,
            fov_y: 60f64.to_radians(),
            viewport: Viewport::new(800.0, 800.0),
            z_near: 0.01,
        }
    }
}

/// Camera frame: eye position plus orthonormal right/up/forward axes.
struct Basis {
    eye: Vec3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
}

impl OrbitCamera {
    pub fn eye(&self) -> Vec3 {
        let pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        Vec3::new(
            self.distance * self.yaw.cos() * pitch.cos(),
            self.distance * self.yaw.sin() * pitch.cos(),
            self.distance * pitch.sin(),
        )
    }

    fn basis(&self) -> Option<Basis> {
        let eye = self.eye();
        let forward = (Vec3::ZERO - eye).normalized()?;
        let right = forward.cross(UP).normalized()?;
        let up = right.cross(forward);
        Some(Basis {
            eye,
            right,
            up,
            forward,
        })
    }

    fn half_extents(&self) -> (f64, f64) {
        let tan_y = (self.fov_y * 0.5).tan();
        let aspect = (self.viewport.width / self.viewport.height).max(1e-3);
        (tan_y * aspect, tan_y)
    }
}

impl ScreenProjector for OrbitCamera {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn project(&self, world: Vec3) -> Option<Vec2> {
        let b = self.basis()?;
        let rel = world - b.eye;
        let depth = rel.dot(b.forward);
        if depth <= self.z_near {
            return None;
        }
        let (hx, hy) = self.half_extents();
        let ndc_x = rel.dot(b.right) / (depth * hx);
        let ndc_y = rel.dot(b.up) / (depth * hy);
        Some(Vec2::new(
            (ndc_x + 1.0) * 0.5 * self.viewport.width,
            (1.0 - ndc_y) * 0.5 * self.viewport.height,
        ))
    }

    fn unproject(&self, screen: Vec2) -> Option<Ray> {
        let b = self.basis()?;
        let (hx, hy) = self.half_extents();
        let ndc_x = 2.0 * screen.x / self.viewport.width - 1.0;
        let ndc_y = 1.0 - 2.0 * screen.y / self.viewport.height;
        let dir = b.forward + b.right * (ndc_x * hx) + b.up * (ndc_y * hy);
        Some(Ray::new(b.eye, dir))
    }
}
