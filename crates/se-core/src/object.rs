//! Scene object definition

use glam::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_COLOR;
use crate::transform::Transform;

/// An object placed in the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: Uuid,
    pub name: String,
    pub transform: Transform,
    pub visible: bool,
    /// Material color (RGBA)
    pub color: [f32; 4],
}

impl SceneObject {
    /// Create a new object with a unit transform at the origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transform: Transform::default(),
            visible: true,
            color: DEFAULT_COLOR,
        }
    }

    /// Create an object with the given centre and size
    pub fn with_rect(name: impl Into<String>, position: Vec2, width: f32, height: f32) -> Self {
        Self {
            transform: Transform::new(position, width, height),
            ..Self::new(name)
        }
    }

    /// Builder: set the color
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }
}
