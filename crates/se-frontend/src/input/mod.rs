//! Polled input abstraction

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
}

/// Keys the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
}

/// Source of polled input state, implemented by the host's window layer
pub trait InputSource {
    /// Check if a mouse button is currently held
    fn is_button_pressed(&self, button: MouseButton) -> bool;

    /// Check if a key is currently held
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Mouse position in pixels, origin at the viewport's top-left corner
    fn mouse_screen_position(&self) -> Vec2;
}

/// Input state captured at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub mouse: Vec2,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub up: bool,
    #[serde(default)]
    pub down: bool,
}

impl InputSnapshot {
    /// Mouse at `(x, y)` with nothing held
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            mouse: Vec2::new(x, y),
            ..Self::default()
        }
    }

    /// Builder: set the left button state
    pub fn with_left(mut self, pressed: bool) -> Self {
        self.left = pressed;
        self
    }

    /// Builder: set a key state
    pub fn with_key(mut self, key: Key, pressed: bool) -> Self {
        match key {
            Key::Up => self.up = pressed,
            Key::Down => self.down = pressed,
        }
        self
    }
}

impl InputSource for InputSnapshot {
    fn is_button_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
        }
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
        }
    }

    fn mouse_screen_position(&self) -> Vec2 {
        self.mouse
    }
}
