//! Orthographic 2D scene camera

use glam::Vec2;

/// Orthographic camera looking at a world-coordinate (WC) window.
///
/// The visible window is `wc_width` wide, centred on `wc_center`; its height
/// follows the viewport aspect ratio. World space is y-up, screen space is
/// y-down with the origin at the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    wc_center: Vec2,
    wc_width: f32,
    /// Viewport size in pixels
    viewport: Vec2,
}

impl Camera2D {
    /// Create a camera showing `wc_width` world units across a `viewport`-sized area
    pub fn new(wc_center: Vec2, wc_width: f32, viewport: Vec2) -> Self {
        Self {
            wc_center,
            wc_width,
            viewport: viewport.max(Vec2::ONE),
        }
    }

    /// World width of the visible window
    pub fn wc_width(&self) -> f32 {
        self.wc_width
    }

    /// World height of the visible window
    pub fn wc_height(&self) -> f32 {
        self.wc_width * self.viewport.y / self.viewport.x
    }

    /// World-space centre of the visible window
    pub fn wc_center(&self) -> Vec2 {
        self.wc_center
    }

    /// Move the visible window
    pub fn set_wc_center(&mut self, x: f32, y: f32) {
        self.wc_center = Vec2::new(x, y);
    }

    /// Viewport size in pixels
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Scale the visible world width. Factors below 1 zoom in.
    pub fn zoom_by(&mut self, factor: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            tracing::warn!("Ignoring invalid zoom factor {}", factor);
            return;
        }
        self.wc_width *= factor;
    }

    /// Convert a screen-space mouse position to world coordinates
    pub fn mouse_wc(&self, screen: Vec2) -> Vec2 {
        let size = Vec2::new(self.wc_width, self.wc_height());
        let min = self.wc_center - size * 0.5;
        Vec2::new(
            min.x + screen.x * size.x / self.viewport.x,
            min.y + (self.viewport.y - screen.y) * size.y / self.viewport.y,
        )
    }

    /// Convert a world position to screen space (inverse of [`Camera2D::mouse_wc`])
    pub fn wc_to_screen(&self, world: Vec2) -> Vec2 {
        let size = Vec2::new(self.wc_width, self.wc_height());
        let min = self.wc_center - size * 0.5;
        Vec2::new(
            (world.x - min.x) * self.viewport.x / size.x,
            self.viewport.y - (world.y - min.y) * self.viewport.y / size.y,
        )
    }
}
