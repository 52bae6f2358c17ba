//! Resize indicator: an arm sticking out of the selection with a square at its end

use glam::Vec2;
use se_core::{Corner, Transform};

use crate::camera::Camera2D;
use crate::config::GizmoConfig;
use crate::traits::{DrawTarget, Gizmo, GizmoContext};
use crate::vertex::{LineInstance, QuadInstance};

/// Arm line from an anchor point plus a camera-scaled square at its end.
///
/// The square side is `camera_width * square_ratio`, so it keeps the same
/// on-screen size at every zoom level.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGizmo {
    arm: LineInstance,
    square: QuadInstance,
    length: f32,
    square_ratio: f32,
}

impl ResizeGizmo {
    /// Create a gizmo and place it on `transform`
    pub fn new(transform: &Transform, camera: &Camera2D, config: &GizmoConfig) -> Self {
        let mut gizmo = Self {
            arm: LineInstance::new(Vec2::ZERO, Vec2::ZERO, config.arm_color),
            square: QuadInstance::new(Vec2::ZERO, Vec2::ZERO, config.resize_square_color),
            length: config.resize_arm_length,
            square_ratio: config.resize_square_ratio,
        };
        gizmo.update(&GizmoContext { transform, camera });
        gizmo
    }

    /// Anchor point the gizmo follows on a transform
    pub fn anchor_for(transform: &Transform) -> Vec2 {
        transform.corner(Corner::TopRight)
    }

    /// Place the arm at `(x, y)` and the square at `(x + length, y)`
    pub fn reposition(&mut self, x: f32, y: f32, length: f32, camera_width: f32) {
        let start = Vec2::new(x, y);
        let end = Vec2::new(x + length, y);
        let side = camera_width * self.square_ratio;

        self.length = length;
        self.arm.set_first_vertex(start);
        self.arm.set_second_vertex(end);
        self.square.center = end.to_array();
        self.square.size = [side, side];
    }

    /// Check if `p` (world units) is inside the square
    pub fn contains(&self, p: Vec2) -> bool {
        self.square.contains(p)
    }

    /// Line from the anchor to the square
    pub fn arm(&self) -> &LineInstance {
        &self.arm
    }

    /// Square at the end of the arm, sized from the camera width
    pub fn square(&self) -> &QuadInstance {
        &self.square
    }

    /// Arm length in world units
    pub fn length(&self) -> f32 {
        self.length
    }
}

impl Gizmo for ResizeGizmo {
    fn update(&mut self, ctx: &GizmoContext<'_>) {
        let anchor = Self::anchor_for(ctx.transform);
        self.reposition(anchor.x, anchor.y, self.length, ctx.camera.wc_width());
    }

    fn draw(&self, camera: &Camera2D, target: &mut dyn DrawTarget) {
        target.draw_line(camera, &self.arm);
        target.draw_quad(camera, &self.square);
    }
}
