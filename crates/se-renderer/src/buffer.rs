//! CPU-side instance buffer for gizmo primitives

use crate::camera::Camera2D;
use crate::traits::DrawTarget;
use crate::vertex::{LineInstance, QuadInstance};

/// Collects gizmo primitives for one frame.
///
/// A GPU backend uploads [`PrimitiveBuffer::line_bytes`] and
/// [`PrimitiveBuffer::quad_bytes`] as instance buffers and clears the buffer
/// before the next frame.
#[derive(Debug, Default, Clone)]
pub struct PrimitiveBuffer {
    lines: Vec<LineInstance>,
    quads: Vec<QuadInstance>,
}

impl PrimitiveBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded lines, in submission order
    pub fn lines(&self) -> &[LineInstance] {
        &self.lines
    }

    /// Recorded quads, in submission order
    pub fn quads(&self) -> &[QuadInstance] {
        &self.quads
    }

    /// Raw bytes of the line instances
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }

    /// Raw bytes of the quad instances
    pub fn quad_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.quads)
    }

    /// Check if nothing was drawn
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.quads.is_empty()
    }

    /// Drop all recorded primitives
    pub fn clear(&mut self) {
        self.lines.clear();
        self.quads.clear();
    }
}

impl DrawTarget for PrimitiveBuffer {
    fn draw_line(&mut self, _camera: &Camera2D, line: &LineInstance) {
        self.lines.push(*line);
    }

    fn draw_quad(&mut self, _camera: &Camera2D, quad: &QuadInstance) {
        self.quads.push(*quad);
    }
}
