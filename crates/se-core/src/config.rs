//! Direct-manipulation configuration
//!
//! Tunable thresholds for hit-testing, resizing and camera input. Values
//! default to the editor constants and can be loaded from a RON file.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CORNER_ZONE_SIZE, KEYBOARD_POLL_INTERVAL_MS, MIN_EXTENT, ROTATION_HANDLE_RADIUS,
    ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};

/// Hit-testing and editing thresholds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManipulationConfig {
    /// Minimum width/height a resize may produce
    pub min_extent: f32,
    /// Side length of the corner grab zones
    pub corner_zone: f32,
    /// Hit radius around the rotation handle endpoint
    pub rotation_handle_radius: f32,
    /// Zoom factor for the Up key
    pub zoom_in_factor: f32,
    /// Zoom factor for the Down key
    pub zoom_out_factor: f32,
    /// Keyboard polling period in milliseconds
    pub keyboard_poll_interval_ms: u64,
}

impl Default for ManipulationConfig {
    fn default() -> Self {
        Self {
            min_extent: MIN_EXTENT,
            corner_zone: CORNER_ZONE_SIZE,
            rotation_handle_radius: ROTATION_HANDLE_RADIUS,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
            keyboard_poll_interval_ms: KEYBOARD_POLL_INTERVAL_MS,
        }
    }
}

impl ManipulationConfig {
    /// Keyboard polling period
    pub fn keyboard_poll_interval(&self) -> Duration {
        Duration::from_millis(self.keyboard_poll_interval_ms.max(1))
    }

    /// The transform floor can only be raised, never lowered below [`MIN_EXTENT`]
    pub fn effective_min_extent(&self) -> f32 {
        self.min_extent.max(MIN_EXTENT)
    }

    /// Save configuration to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron(&content)
    }

    /// Parse configuration from a RON string
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }
}

/// Configuration-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}
