pub mod equirect;
pub mod precision;
pub mod ray;
pub mod spherical;
pub mod vec;

pub use equirect::*;
pub use precision::*;
pub use ray::*;
pub use spherical::*;
pub use vec::*;
