//! Gizmo appearance configuration

use serde::{Deserialize, Serialize};

use se_core::constants::{RESIZE_ARM_LENGTH, RESIZE_SQUARE_RATIO, ROTATION_HANDLE_SIZE};

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Gizmo configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GizmoConfig {
    /// Whether gizmos are drawn
    pub enabled: bool,
    /// Resize arm line color (RGBA)
    pub arm_color: [f32; 4],
    /// Resize square color (RGBA)
    pub resize_square_color: [f32; 4],
    /// Rotation line color (RGBA)
    pub rotation_line_color: [f32; 4],
    /// Rotation handle color (RGBA)
    pub rotation_handle_color: [f32; 4],
    /// Rotation handle side length (world units)
    pub rotation_handle_size: f32,
    /// Resize square size as a fraction of the camera world width
    pub resize_square_ratio: f32,
    /// Distance from the anchor corner to the resize square (world units)
    pub resize_arm_length: f32,
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            arm_color: WHITE,
            resize_square_color: RED,
            rotation_line_color: WHITE,
            rotation_handle_color: RED,
            rotation_handle_size: ROTATION_HANDLE_SIZE,
            resize_square_ratio: RESIZE_SQUARE_RATIO,
            resize_arm_length: RESIZE_ARM_LENGTH,
        }
    }
}
