pub mod reference_sphere;

pub use reference_sphere::*;
