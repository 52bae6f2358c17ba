//! Scene Editor Frontend
//!
//! Direct manipulation of 2D scene objects: selection by click, body drag,
//! corner resize, handle rotation, camera pan and keyboard zoom.

pub mod camera_input;
pub mod controller;
pub mod input;
pub mod panels;
pub mod replay;
pub mod state;

// Re-exports for convenience
pub use camera_input::{CameraInputAdapter, FixedRateTimer};
pub use controller::ManipulationController;
pub use input::{InputSnapshot, InputSource, Key, MouseButton};
pub use panels::{DetailsPanel, PanelEvent, RecordingDetailsPanel, TRANSFORM_CONTENT_ID};
pub use state::{InteractionMode, PrevMouseState, Scene};
