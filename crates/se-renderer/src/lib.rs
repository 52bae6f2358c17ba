//! Scene Editor Renderer
//!
//! 2D camera, gizmo hit-testing and the selection gizmos of the scene editor.
//! Actual drawing is delegated to a backend through [`traits::DrawTarget`].
//!
//! # Module Structure
//!
//! ```text
//! se-renderer/
//! ├── camera.rs        # Orthographic 2D camera (WC window, mouse mapping, zoom)
//! ├── config.rs        # Gizmo appearance configuration
//! ├── gizmo/           # Hit-testing (collision), ResizeGizmo, RotationGizmo
//! ├── traits.rs        # Gizmo and DrawTarget seams
//! ├── vertex.rs        # Pod instance records for lines and quads
//! └── buffer.rs        # CPU-side instance buffer implementing DrawTarget
//! ```

pub mod buffer;
pub mod camera;
pub mod config;
pub mod gizmo;
pub mod traits;
pub mod vertex;

pub use buffer::PrimitiveBuffer;
pub use camera::Camera2D;
pub use config::GizmoConfig;
pub use gizmo::{GizmoSet, HitRegion, HitTester, ResizeGizmo, RotationGizmo};
pub use traits::{DrawTarget, Gizmo, GizmoContext};
pub use vertex::{LineInstance, QuadInstance};
