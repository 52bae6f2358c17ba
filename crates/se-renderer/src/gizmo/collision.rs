//! Gizmo collision detection utilities
//!
//! Point-in-region tests of a world-space mouse position against a
//! transform's body, its four corner grab zones and its rotation handle.
//! All tests are pure and total.
//!
//! # Regions
//!
//! ```text
//!   TL ┌──┬──────────┬──┐ TR
//!      └──┘          └──┘
//!      │     body       │      ● rotation handle at
//!      ┌──┐          ┌──┐        centre + radius * (cos r, sin r)
//!   BL └──┴──────────┴──┘ BR
//! ```
//!
//! Corner zones are `corner_zone`-sized squares lying inside the box, so they
//! overlap the body. [`HitTester::classify`] resolves the overlap with a fixed
//! priority: rotation handle, then corners in [`Corner::ALL`] order, then body.

use glam::Vec2;
use se_core::constants::{CORNER_ZONE_SIZE, ROTATION_HANDLE_RADIUS};
use se_core::{Corner, ManipulationConfig, SceneObject, Transform};

/// What part of a transform a point hits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// The rotation handle disc
    RotationHandle,
    /// A corner resize zone
    Corner(Corner),
    /// The body of the box
    Body,
}

/// Hit-test thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTester {
    /// Side length of the corner grab zones
    pub corner_zone: f32,
    /// Hit radius around the rotation handle endpoint
    pub rotation_handle_radius: f32,
}

impl Default for HitTester {
    fn default() -> Self {
        Self {
            corner_zone: CORNER_ZONE_SIZE,
            rotation_handle_radius: ROTATION_HANDLE_RADIUS,
        }
    }
}

impl From<&ManipulationConfig> for HitTester {
    fn from(config: &ManipulationConfig) -> Self {
        Self {
            corner_zone: config.corner_zone,
            rotation_handle_radius: config.rotation_handle_radius,
        }
    }
}

impl HitTester {
    /// Point strictly inside the axis-aligned box
    pub fn in_body(&self, t: &Transform, p: Vec2) -> bool {
        let d = (p - t.position()).abs();
        let half = t.half_extents();
        d.x < half.x && d.y < half.y
    }

    /// Point strictly inside the grab zone of `corner`
    pub fn on_corner(&self, corner: Corner, t: &Transform, p: Vec2) -> bool {
        let c = t.corner(corner);
        let zone = self.corner_zone;

        let in_x = if corner.is_left() {
            p.x > c.x && p.x < c.x + zone
        } else {
            p.x > c.x - zone && p.x < c.x
        };
        let in_y = if corner.is_top() {
            p.y < c.y && p.y > c.y - zone
        } else {
            p.y < c.y + zone && p.y > c.y
        };
        in_x && in_y
    }

    /// Point within `rotation_handle_radius` of the rotation handle endpoint
    pub fn on_rotation_handle(&self, t: &Transform, p: Vec2) -> bool {
        p.distance(rotation_handle_position(t)) < self.rotation_handle_radius
    }

    /// First corner (in priority order) whose zone contains `p`
    pub fn corner_at(&self, t: &Transform, p: Vec2) -> Option<Corner> {
        Corner::ALL
            .into_iter()
            .find(|&corner| self.on_corner(corner, t, p))
    }

    /// Classify `p` against `t`: rotation handle, then corners, then body
    pub fn classify(&self, t: &Transform, p: Vec2) -> Option<HitRegion> {
        if self.on_rotation_handle(t, p) {
            return Some(HitRegion::RotationHandle);
        }
        if let Some(corner) = self.corner_at(t, p) {
            return Some(HitRegion::Corner(corner));
        }
        if self.in_body(t, p) {
            return Some(HitRegion::Body);
        }
        None
    }

    /// Check if a click at `p` selects `t` (body or rotation handle)
    pub fn selects(&self, t: &Transform, p: Vec2) -> bool {
        self.in_body(t, p) || self.on_rotation_handle(t, p)
    }

    /// First object, in scene order, that a click at `p` selects
    pub fn pick<'a, I>(&self, objects: I, p: Vec2) -> Option<&'a SceneObject>
    where
        I: IntoIterator<Item = &'a SceneObject>,
    {
        objects
            .into_iter()
            .find(|object| self.selects(&object.transform, p))
    }
}

/// World position of the rotation handle: the end of a half-diagonal-long
/// arm from the centre along the current rotation angle
pub fn rotation_handle_position(t: &Transform) -> Vec2 {
    t.position() + Vec2::from_angle(t.rotation_in_rad()) * t.rotation_radius()
}

/// [`HitTester::in_body`] with default thresholds
pub fn in_body(t: &Transform, p: Vec2) -> bool {
    HitTester::default().in_body(t, p)
}

/// [`HitTester::on_corner`] with default thresholds
pub fn on_corner(corner: Corner, t: &Transform, p: Vec2) -> bool {
    HitTester::default().on_corner(corner, t, p)
}

/// [`HitTester::on_rotation_handle`] with default thresholds
pub fn on_rotation_handle(t: &Transform, p: Vec2) -> bool {
    HitTester::default().on_rotation_handle(t, p)
}

/// [`HitTester::classify`] with default thresholds
pub fn classify(t: &Transform, p: Vec2) -> Option<HitRegion> {
    HitTester::default().classify(t, p)
}
