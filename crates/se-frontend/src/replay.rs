//! Scripted input replay
//!
//! Drives a [`ManipulationController`] from a RON script of input samples,
//! the way a window layer would drive it from live events. Used by the
//! `se-replay` binary to reproduce interaction sequences headlessly.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use se_core::constants::DEFAULT_COLOR;
use se_core::{ConfigError, ManipulationConfig, SceneObject};
use se_renderer::{Camera2D, GizmoConfig, PrimitiveBuffer};

use crate::camera_input::FixedRateTimer;
use crate::controller::ManipulationController;
use crate::input::InputSnapshot;
use crate::panels::{PanelEvent, RecordingDetailsPanel};
use crate::state::{InteractionMode, Scene};

/// Replay-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid script: {0}")]
    InvalidScript(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Initial camera of a replay
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraSetup {
    #[serde(default)]
    pub center: Vec2,
    pub width: f32,
    pub viewport: Vec2,
}

/// An object placed in the scene before the first sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectSetup {
    pub name: String,
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    /// Rotation in degrees
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_color")]
    pub color: [f32; 4],
}

fn default_color() -> [f32; 4] {
    DEFAULT_COLOR
}

impl ObjectSetup {
    fn build(&self) -> SceneObject {
        let mut object = SceneObject::with_rect(&self.name, self.position, self.width, self.height)
            .with_color(self.color);
        object.transform.set_rotation_in_degree(self.rotation);
        object
    }
}

/// One input sample
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReplaySample {
    /// Mouse position in pixels, top-left origin
    pub mouse: Vec2,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub up: bool,
    #[serde(default)]
    pub down: bool,
    /// Time since the previous sample
    #[serde(default)]
    pub elapsed_ms: u64,
}

impl ReplaySample {
    pub fn input(&self) -> InputSnapshot {
        InputSnapshot {
            mouse: self.mouse,
            left: self.left,
            up: self.up,
            down: self.down,
            ..InputSnapshot::default()
        }
    }
}

/// A complete replay: starting scene plus input samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayScript {
    pub camera: CameraSetup,
    #[serde(default)]
    pub objects: Vec<ObjectSetup>,
    #[serde(default)]
    pub samples: Vec<ReplaySample>,
}

impl ReplayScript {
    /// Load a script from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ReplayError::Io(e.to_string()))?;
        Self::from_ron(&content)
    }

    /// Parse a script from a RON string
    pub fn from_ron(content: &str) -> Result<Self, ReplayError> {
        ron::from_str(content).map_err(|e| ReplayError::Parse(e.to_string()))
    }

    /// Build the starting scene
    pub fn build_scene(&self) -> Result<Scene, ReplayError> {
        let CameraSetup {
            center,
            width,
            viewport,
        } = self.camera;
        if !width.is_finite() || width <= 0.0 {
            return Err(ReplayError::InvalidScript(format!(
                "camera width must be positive, got {width}"
            )));
        }

        let mut scene = Scene::new(Camera2D::new(center, width, viewport));
        for setup in &self.objects {
            scene.add_object(setup.build());
        }
        Ok(scene)
    }
}

/// Keyboard polls run for a single sample, however long its gap
pub const MAX_KEYBOARD_POLLS_PER_SAMPLE: u32 = 100;

/// Runs samples through a controller, one frame per sample
pub struct ReplayRunner {
    scene: Scene,
    controller: ManipulationController,
    panel: RecordingDetailsPanel,
    keyboard_timer: FixedRateTimer,
    frame: PrimitiveBuffer,
    zoom_polls: u32,
}

impl ReplayRunner {
    pub fn new(
        script: &ReplayScript,
        config: ManipulationConfig,
        gizmo_config: GizmoConfig,
    ) -> Result<Self, ReplayError> {
        Ok(Self {
            scene: script.build_scene()?,
            keyboard_timer: FixedRateTimer::keyboard(&config),
            controller: ManipulationController::new(config, gizmo_config),
            panel: RecordingDetailsPanel::new(),
            frame: PrimitiveBuffer::new(),
            zoom_polls: 0,
        })
    }

    /// Keyboard polls due in the elapsed time, then the mouse handler,
    /// then the per-frame gizmo update and draw
    pub fn step(&mut self, sample: &ReplaySample) {
        let input = sample.input();

        let due = self
            .keyboard_timer
            .advance(Duration::from_millis(sample.elapsed_ms));
        if due > MAX_KEYBOARD_POLLS_PER_SAMPLE {
            tracing::debug!(
                "Capping {} due keyboard polls to {}",
                due,
                MAX_KEYBOARD_POLLS_PER_SAMPLE
            );
        }
        for _ in 0..due.min(MAX_KEYBOARD_POLLS_PER_SAMPLE) {
            // Keys are fixed within a sample, so one idle poll means all are idle
            if !self.controller.handle_keyboard_input(&mut self.scene, &input) {
                break;
            }
            self.zoom_polls += 1;
        }

        self.controller
            .handle_mouse_input(&mut self.scene, &input, &mut self.panel);
        self.controller.update_gizmos(&self.scene, &mut self.panel);

        self.frame.clear();
        self.controller.draw_gizmos(&self.scene, &mut self.frame);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn controller(&self) -> &ManipulationController {
        &self.controller
    }

    /// Snapshot of the current state
    pub fn report(&self) -> ReplayReport {
        ReplayReport {
            camera: self.scene.camera().copied(),
            objects: self.scene.instances().to_vec(),
            selection: self.controller.selection(),
            mode: self.controller.mode(),
            panel_events: self.panel.events().to_vec(),
            zoom_polls: self.zoom_polls,
            gizmo_lines: self.frame.lines().len(),
            gizmo_quads: self.frame.quads().len(),
        }
    }
}

/// Run every sample of `script` and report the final state
pub fn run(
    script: &ReplayScript,
    config: ManipulationConfig,
    gizmo_config: GizmoConfig,
) -> Result<ReplayReport, ReplayError> {
    let mut runner = ReplayRunner::new(script, config, gizmo_config)?;
    for sample in &script.samples {
        runner.step(sample);
    }
    tracing::debug!("Replayed {} samples", script.samples.len());
    Ok(runner.report())
}

/// Final state of a replay
#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub camera: Option<Camera2D>,
    pub objects: Vec<SceneObject>,
    pub selection: Option<Uuid>,
    pub mode: InteractionMode,
    pub panel_events: Vec<PanelEvent>,
    pub zoom_polls: u32,
    /// Gizmo primitives drawn in the last frame
    pub gizmo_lines: usize,
    pub gizmo_quads: usize,
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(camera) = &self.camera {
            let center = camera.wc_center();
            writeln!(
                f,
                "camera: center ({:.3}, {:.3}) width {:.3}",
                center.x,
                center.y,
                camera.wc_width()
            )?;
        }
        writeln!(f, "zoom polls: {}", self.zoom_polls)?;
        writeln!(f, "mode: {}", self.mode.display_name())?;

        for object in &self.objects {
            let t = &object.transform;
            let marker = if Some(object.id) == self.selection { "*" } else { " " };
            writeln!(
                f,
                "{marker} {}: pos ({:.3}, {:.3}) size {:.3} x {:.3} rot {:.3} deg",
                object.name,
                t.x(),
                t.y(),
                t.width(),
                t.height(),
                t.rotation_in_degree()
            )?;
        }

        write!(
            f,
            "panel events: {}, gizmo primitives: {} lines, {} quads",
            self.panel_events.len(),
            self.gizmo_lines,
            self.gizmo_quads
        )
    }
}

/// Command-line arguments of `se-replay`
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "se-replay")]
#[command(about = "Replay a RON input script against the scene manipulation controller")]
pub struct ReplayArgs {
    /// Replay script (RON)
    pub script: PathBuf,

    /// Manipulation configuration file (RON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ReplayArgs {
    /// Manipulation config from `--config`, or the defaults
    pub fn load_config(&self) -> Result<ManipulationConfig, ReplayError> {
        match &self.config {
            Some(path) => Ok(ManipulationConfig::load(path)?),
            None => Ok(ManipulationConfig::default()),
        }
    }
}
