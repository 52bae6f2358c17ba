//! Scene Editor Core
//!
//! Data model shared by the renderer and the manipulation frontend:
//! object transforms, scene objects and manipulation settings.

pub mod config;
pub mod constants;
pub mod object;
pub mod transform;

pub use config::{ConfigError, ManipulationConfig};
pub use object::SceneObject;
pub use transform::{Corner, Transform};
