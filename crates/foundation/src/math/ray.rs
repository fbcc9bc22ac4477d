use super::Vec3;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Nearest non-negative hit against a sphere centred on the origin.
    ///
    /// Returns the point on the sphere, or `None` when the ray misses, points
    /// away, or has a zero direction.
    pub fn hit_origin_sphere(&self, radius: f64) -> Option<Vec3> {
        let dir = self.dir.normalized()?;
        let b = self.origin.dot(dir);
        let c = self.origin.dot(self.origin) - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let near = -b - root;
        let far = -b + root;
        let t = if near >= 0.0 {
            near
        } else if far >= 0.0 {
            far
        } else {
            return None;
        };
        Some(self.origin + dir * t)
    }
}

#[cfg(test)]
mod tests {
    use super::Ray;
    use crate::math::Vec3;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn hits_front_face_from_outside() {
        let ray = Ray::new(Vec3::new(30.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        let hit = ray.hit_origin_sphere(10.0).expect("hit");
        assert_close(hit.x, 10.0, 1e-12);
        assert_close(hit.y, 0.0, 1e-12);
    }

    #[test]
    fn misses_and_backwards_rays() {
        let past = Ray::new(Vec3::new(30.0, 20.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        assert!(past.hit_origin_sphere(10.0).is_none());

        let away = Ray::new(Vec3::new(30.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(away.hit_origin_sphere(10.0).is_none());

        let degenerate = Ray::new(Vec3::new(30.0, 0.0, 0.0), Vec3::ZERO);
        assert!(degenerate.hit_origin_sphere(10.0).is_none());
    }

    #[test]
    fn inside_origin_hits_far_side() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));
        let hit = ray.hit_origin_sphere(10.0).expect("hit");
        assert_close(hit.z, 10.0, 1e-12);
        assert_eq!(ray.at(1.5), Vec3::new(0.0, 0.0, 3.0));
    }
}
