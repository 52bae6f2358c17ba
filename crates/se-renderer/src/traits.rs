//! Seams between gizmos and the rendering backend

use se_core::Transform;

use crate::camera::Camera2D;
use crate::vertex::{LineInstance, QuadInstance};

/// Rendering backend that accepts gizmo primitives.
///
/// Implemented by the host's renderer; draw calls, projection and buffer
/// management live behind it.
pub trait DrawTarget {
    /// Draw a line segment
    fn draw_line(&mut self, camera: &Camera2D, line: &LineInstance);

    /// Draw a filled quad
    fn draw_quad(&mut self, camera: &Camera2D, quad: &QuadInstance);
}

/// Per-frame inputs a gizmo derives its geometry from
#[derive(Debug, Clone, Copy)]
pub struct GizmoContext<'a> {
    /// Live transform of the selected object
    pub transform: &'a Transform,
    /// Active camera
    pub camera: &'a Camera2D,
}

/// A presentational overlay that follows the selected object
pub trait Gizmo {
    /// Re-derive geometry from the current transform and camera
    fn update(&mut self, ctx: &GizmoContext<'_>);

    /// Submit primitives to the backend
    fn draw(&self, camera: &Camera2D, target: &mut dyn DrawTarget);
}
