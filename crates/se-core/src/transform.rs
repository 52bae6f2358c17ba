//! Position, size and rotation of a scene object

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::MIN_EXTENT;

/// One of the four corners of an axis-aligned transform box.
///
/// World space is y-up, so "top" is the `+y` side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners in hit-test priority order
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Build a corner from its top/left flags
    pub fn from_flags(top: bool, left: bool) -> Self {
        match (top, left) {
            (true, true) => Corner::TopLeft,
            (true, false) => Corner::TopRight,
            (false, true) => Corner::BottomLeft,
            (false, false) => Corner::BottomRight,
        }
    }

    /// Check if this corner is on the top edge
    pub fn is_top(&self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Check if this corner is on the left edge
    pub fn is_left(&self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// The diagonally opposite corner
    pub fn opposite(&self) -> Self {
        Corner::from_flags(!self.is_top(), !self.is_left())
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Corner::TopLeft => "Top Left",
            Corner::TopRight => "Top Right",
            Corner::BottomLeft => "Bottom Left",
            Corner::BottomRight => "Bottom Right",
        }
    }
}

/// Transform of a scene object: centre position, extents and rotation.
///
/// Width and height never drop below [`MIN_EXTENT`]; every setter clamps,
/// and so does deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "TransformData", into = "TransformData")]
pub struct Transform {
    position: Vec2,
    width: f32,
    height: f32,
    /// Rotation in radians
    rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 1.0, 1.0)
    }
}

impl Transform {
    /// Create an unrotated transform centred at `position`
    pub fn new(position: Vec2, width: f32, height: f32) -> Self {
        Self {
            position,
            width: clamp_extent(width),
            height: clamp_extent(height),
            rotation: 0.0,
        }
    }

    /// Builder: set rotation in radians
    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.position.x = x;
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Set width, clamped to [`MIN_EXTENT`]
    pub fn set_width(&mut self, width: f32) {
        self.width = clamp_extent(width);
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Set height, clamped to [`MIN_EXTENT`]
    pub fn set_height(&mut self, height: f32) {
        self.height = clamp_extent(height);
    }

    /// Size as `(width, height)`
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Half of the width and height
    pub fn half_extents(&self) -> Vec2 {
        self.size() * 0.5
    }

    pub fn rotation_in_rad(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation_in_rad(&mut self, radians: f32) {
        self.rotation = radians;
    }

    pub fn rotation_in_degree(&self) -> f32 {
        self.rotation.to_degrees()
    }

    pub fn set_rotation_in_degree(&mut self, degrees: f32) {
        self.rotation = degrees.to_radians();
    }

    pub fn inc_rotation_by_rad(&mut self, delta: f32) {
        self.rotation += delta;
    }

    /// World position of a corner of the unrotated box
    pub fn corner(&self, corner: Corner) -> Vec2 {
        let half = self.half_extents();
        let sx = if corner.is_left() { -1.0 } else { 1.0 };
        let sy = if corner.is_top() { 1.0 } else { -1.0 };
        self.position + Vec2::new(sx * half.x, sy * half.y)
    }

    /// Half the diagonal: distance from the centre to the rotation handle
    pub fn rotation_radius(&self) -> f32 {
        (self.width * self.width + self.height * self.height).sqrt() / 2.0
    }
}

/// Serialized form of [`Transform`]
#[derive(Serialize, Deserialize)]
struct TransformData {
    position: Vec2,
    width: f32,
    height: f32,
    #[serde(default)]
    rotation: f32,
}

impl From<TransformData> for Transform {
    fn from(data: TransformData) -> Self {
        Transform::new(data.position, data.width, data.height).with_rotation(data.rotation)
    }
}

impl From<Transform> for TransformData {
    fn from(t: Transform) -> Self {
        Self {
            position: t.position,
            width: t.width,
            height: t.height,
            rotation: t.rotation,
        }
    }
}

/// NaN collapses to the floor as well, so extents stay strictly positive.
fn clamp_extent(value: f32) -> f32 {
    if value >= MIN_EXTENT { value } else { MIN_EXTENT }
}
