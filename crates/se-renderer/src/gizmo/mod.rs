//! Selection gizmos
//!
//! Presentational overlays that follow the selected object. They never own
//! the transform: each frame the host passes the live transform through a
//! [`GizmoContext`] and the gizmos re-derive their geometry from it.

mod collision;
mod resize;
mod rotation;

pub use collision::{
    HitRegion, HitTester, classify, in_body, on_corner, on_rotation_handle,
    rotation_handle_position,
};
pub use resize::ResizeGizmo;
pub use rotation::RotationGizmo;

use se_core::Transform;

use crate::camera::Camera2D;
use crate::config::GizmoConfig;
use crate::traits::{DrawTarget, Gizmo, GizmoContext};

/// Gizmos attached to the current selection
#[derive(Debug, Clone, PartialEq)]
pub struct GizmoSet {
    /// Arm and square at the top-right corner
    pub resize: ResizeGizmo,
    /// Centre-to-handle line and handle
    pub rotation: RotationGizmo,
    enabled: bool,
}

impl GizmoSet {
    /// Build both gizmos for a freshly selected transform
    pub fn new(transform: &Transform, camera: &Camera2D, config: &GizmoConfig) -> Self {
        Self {
            resize: ResizeGizmo::new(transform, camera, config),
            rotation: RotationGizmo::new(transform, camera, config),
            enabled: config.enabled,
        }
    }

    /// Whether [`Gizmo::draw`] emits anything
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Gizmo for GizmoSet {
    fn update(&mut self, ctx: &GizmoContext<'_>) {
        self.resize.update(ctx);
        self.rotation.update(ctx);
    }

    fn draw(&self, camera: &Camera2D, target: &mut dyn DrawTarget) {
        if !self.enabled {
            return;
        }
        self.resize.draw(camera, target);
        self.rotation.draw(camera, target);
    }
}
