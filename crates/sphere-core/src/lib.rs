pub mod config;
pub mod constants;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod projection;
pub mod render;
pub mod rotation;
pub mod scene;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use interaction::*;
pub use layout::*;
pub use projection::*;
pub use render::*;
pub use rotation::*;
pub use scene::*;
