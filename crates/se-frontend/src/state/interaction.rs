//! Interaction state machine types
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingRotation     (drag starting on the selection's rotation handle)
//! Idle -> DraggingCorner       (drag starting in one of the four corner zones)
//! Idle -> DraggingBody         (drag starting inside the selection's body)
//! Idle -> PanningCamera        (drag matching no region, or with nothing grabbed)
//!
//! Any -> Idle                  (button released)
//! ```

use glam::Vec2;
use se_core::Corner;

/// The single active mouse interaction.
///
/// Replaces the `dragging_corner`, `dragging_top`, `dragging_left`,
/// `dragging_rotate` and `dragging_camera` flags with one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// No drag in progress
    #[default]
    Idle,
    /// Moving the selection with the mouse
    DraggingBody,
    /// Resizing the selection from a corner
    DraggingCorner {
        /// Dragged corner is on the top edge
        top: bool,
        /// Dragged corner is on the left edge
        left: bool,
    },
    /// Rotating the selection around its centre
    DraggingRotation,
    /// Moving the camera
    PanningCamera,
}

impl InteractionMode {
    /// Corner-drag mode for `corner`
    pub fn corner(corner: Corner) -> Self {
        Self::DraggingCorner {
            top: corner.is_top(),
            left: corner.is_left(),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if the mode edits the selected object's transform
    pub fn edits_selection(&self) -> bool {
        matches!(
            self,
            Self::DraggingBody | Self::DraggingCorner { .. } | Self::DraggingRotation
        )
    }

    /// The dragged corner, if resizing
    pub fn dragged_corner(&self) -> Option<Corner> {
        match *self {
            Self::DraggingCorner { top, left } => Some(Corner::from_flags(top, left)),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::DraggingBody => "Dragging Body",
            Self::DraggingCorner { .. } => "Dragging Corner",
            Self::DraggingRotation => "Dragging Rotation",
            Self::PanningCamera => "Panning Camera",
        }
    }
}

/// Mouse state recorded at the end of the previous sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PrevMouseState {
    /// Screen position (pixels, top-left origin)
    pub screen: Vec2,
    /// World position under the camera of that sample
    pub world: Vec2,
    /// Left button was held
    pub pressed: bool,
}

impl PrevMouseState {
    pub fn x(&self) -> f32 {
        self.world.x
    }

    pub fn y(&self) -> f32 {
        self.world.y
    }
}
