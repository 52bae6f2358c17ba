//! Rotation indicator: a line from the centre to the handle, plus the handle square

use glam::Vec2;
use se_core::Transform;

use super::collision::rotation_handle_position;
use crate::camera::Camera2D;
use crate::config::GizmoConfig;
use crate::traits::{DrawTarget, Gizmo, GizmoContext};
use crate::vertex::{LineInstance, QuadInstance};

/// Line from the tracked transform's centre to its rotation handle
#[derive(Debug, Clone, PartialEq)]
pub struct RotationGizmo {
    line: LineInstance,
    handle: QuadInstance,
}

impl RotationGizmo {
    /// Create a gizmo and place it on `transform`
    pub fn new(transform: &Transform, camera: &Camera2D, config: &GizmoConfig) -> Self {
        let mut gizmo = Self {
            line: LineInstance::new(Vec2::ZERO, Vec2::ZERO, config.rotation_line_color),
            handle: QuadInstance::new(
                Vec2::ZERO,
                Vec2::splat(config.rotation_handle_size),
                config.rotation_handle_color,
            ),
        };
        gizmo.update(&GizmoContext { transform, camera });
        gizmo
    }

    /// Line from the transform centre to the handle
    pub fn line(&self) -> &LineInstance {
        &self.line
    }

    /// Handle square at the end of the line
    pub fn handle(&self) -> &QuadInstance {
        &self.handle
    }

    /// World position of the handle square
    pub fn handle_position(&self) -> Vec2 {
        self.handle.center()
    }
}

impl Gizmo for RotationGizmo {
    fn update(&mut self, ctx: &GizmoContext<'_>) {
        let end = rotation_handle_position(ctx.transform);
        self.line.set_first_vertex(ctx.transform.position());
        self.line.set_second_vertex(end);
        self.handle.center = end.to_array();
    }

    fn draw(&self, camera: &Camera2D, target: &mut dyn DrawTarget) {
        target.draw_line(camera, &self.line);
        target.draw_quad(camera, &self.handle);
    }
}
