//! Global constants for se-core

/// Smallest width or height a transform may have (world units)
pub const MIN_EXTENT: f32 = 0.25;

/// Side length of the square grab zone at each corner of a transform (world units)
pub const CORNER_ZONE_SIZE: f32 = 1.0;

/// Distance from the rotation handle endpoint that still counts as a hit (world units)
pub const ROTATION_HANDLE_RADIUS: f32 = 0.75;

/// Side length of the rotation handle square (world units)
pub const ROTATION_HANDLE_SIZE: f32 = 0.75;

/// Resize square size as a fraction of the camera's world width (`camW / 50 * 0.75`)
pub const RESIZE_SQUARE_RATIO: f32 = 0.75 / 50.0;

/// Length of the arm between the selection corner and the resize square (world units)
pub const RESIZE_ARM_LENGTH: f32 = 1.0;

/// Camera zoom factor applied while the Up key is held
pub const ZOOM_IN_FACTOR: f32 = 0.5;

/// Camera zoom factor applied while the Down key is held
pub const ZOOM_OUT_FACTOR: f32 = 1.5;

/// Keyboard polling period in milliseconds
pub const KEYBOARD_POLL_INTERVAL_MS: u64 = 10;

/// Default color for scene objects (white, RGBA)
pub const DEFAULT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
