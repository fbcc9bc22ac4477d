pub mod error;
pub mod frame;
pub mod texture_image;

pub use error::*;
pub use frame::*;
pub use texture_image::*;
