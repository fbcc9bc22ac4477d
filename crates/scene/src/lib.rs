pub mod config;
pub mod interaction;
pub mod point;
pub mod prefabs;
pub mod projection;
pub mod sampler;
pub mod selection;
pub mod session;
pub mod snap;
pub mod store;
pub mod texture;

pub use config::*;
pub use interaction::*;
pub use point::*;
pub use projection::*;
pub use sampler::*;
pub use selection::*;
pub use session::*;
pub use snap::*;
pub use store::*;
pub use texture::*;
