//! Instance records for gizmo primitives
//!
//! Both types are plain `#[repr(C)]` data so a GPU backend can upload a
//! slice of them with `bytemuck::cast_slice`.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// A world-space line segment
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineInstance {
    /// First vertex (world units)
    pub start: [f32; 2],
    /// Second vertex (world units)
    pub end: [f32; 2],
    /// Line color (RGBA)
    pub color: [f32; 4],
}

impl LineInstance {
    /// Create a line between two world positions
    pub fn new(start: Vec2, end: Vec2, color: [f32; 4]) -> Self {
        Self {
            start: start.to_array(),
            end: end.to_array(),
            color,
        }
    }

    /// Update the first vertex
    pub fn set_first_vertex(&mut self, p: Vec2) {
        self.start = p.to_array();
    }

    /// Update the second vertex
    pub fn set_second_vertex(&mut self, p: Vec2) {
        self.end = p.to_array();
    }

    /// First vertex as a vector
    pub fn start(&self) -> Vec2 {
        Vec2::from_array(self.start)
    }

    /// Second vertex as a vector
    pub fn end(&self) -> Vec2 {
        Vec2::from_array(self.end)
    }
}

/// An axis-aligned filled square or rectangle
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    /// Centre position (world units)
    pub center: [f32; 2],
    /// Width and height (world units)
    pub size: [f32; 2],
    /// Fill color (RGBA)
    pub color: [f32; 4],
}

impl QuadInstance {
    /// Create a quad centred at `center`
    pub fn new(center: Vec2, size: Vec2, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            size: size.to_array(),
            color,
        }
    }

    /// Centre as a vector
    pub fn center(&self) -> Vec2 {
        Vec2::from_array(self.center)
    }

    /// Size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::from_array(self.size)
    }

    /// Check if `p` lies strictly inside the quad
    pub fn contains(&self, p: Vec2) -> bool {
        let d = (p - self.center()).abs();
        let half = self.size() * 0.5;
        d.x < half.x && d.y < half.y
    }
}
