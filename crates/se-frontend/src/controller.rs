//! Direct-manipulation controller
//!
//! Consumes one mouse sample at a time, picks and edits the selected object,
//! pans the camera and keeps the selection gizmos in sync.

use glam::Vec2;
use se_core::{ManipulationConfig, Transform};
use se_renderer::gizmo::{GizmoSet, HitRegion, HitTester};
use se_renderer::{DrawTarget, Gizmo, GizmoConfig, GizmoContext};
use uuid::Uuid;

use crate::camera_input::CameraInputAdapter;
use crate::input::{InputSource, MouseButton};
use crate::panels::{DetailsPanel, TRANSFORM_CONTENT_ID};
use crate::state::{InteractionMode, PrevMouseState, Scene};

/// Mouse-driven selection and transform editing for a [`Scene`].
///
/// Constructed once by the host and fed every input sample through
/// [`ManipulationController::handle_mouse_input`]. The controller never owns
/// scene objects; the selection is an id that is re-validated against the
/// scene whenever it is used.
#[derive(Debug, Clone)]
pub struct ManipulationController {
    config: ManipulationConfig,
    gizmo_config: GizmoConfig,
    hit_tester: HitTester,
    camera_input: CameraInputAdapter,
    mode: InteractionMode,
    selection: Option<Uuid>,
    /// Current press started on the selection
    grabbed: bool,
    gizmos: Option<GizmoSet>,
    prev_mouse: PrevMouseState,
}

impl Default for ManipulationController {
    fn default() -> Self {
        Self::new(ManipulationConfig::default(), GizmoConfig::default())
    }
}

impl ManipulationController {
    pub fn new(config: ManipulationConfig, gizmo_config: GizmoConfig) -> Self {
        Self {
            hit_tester: HitTester::from(&config),
            camera_input: CameraInputAdapter::from(&config),
            config,
            gizmo_config,
            mode: InteractionMode::Idle,
            selection: None,
            grabbed: false,
            gizmos: None,
            prev_mouse: PrevMouseState::default(),
        }
    }

    pub fn config(&self) -> &ManipulationConfig {
        &self.config
    }

    pub fn gizmo_config(&self) -> &GizmoConfig {
        &self.gizmo_config
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Id of the selected object
    pub fn selection(&self) -> Option<Uuid> {
        self.selection
    }

    /// Gizmos of the current selection
    pub fn gizmos(&self) -> Option<&GizmoSet> {
        self.gizmos.as_ref()
    }

    /// Mouse state recorded by the last handled sample
    pub fn prev_mouse(&self) -> PrevMouseState {
        self.prev_mouse
    }

    /// Check if the current press started on the selection
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Process one mouse sample.
    ///
    /// Does nothing while the scene has no camera.
    pub fn handle_mouse_input(
        &mut self,
        scene: &mut Scene,
        input: &dyn InputSource,
        panel: &mut dyn DetailsPanel,
    ) {
        let Some(camera) = scene.camera().copied() else {
            tracing::trace!("No scene camera, skipping mouse sample");
            return;
        };

        let screen = input.mouse_screen_position();
        let mouse = camera.mouse_wc(screen);
        let pressed = input.is_button_pressed(MouseButton::Left);
        let moved = screen != self.prev_mouse.screen;
        tracing::trace!(
            x = mouse.x,
            y = mouse.y,
            pressed,
            moved,
            mode = self.mode.display_name(),
            "Mouse sample"
        );

        if pressed {
            if !self.prev_mouse.pressed {
                if self.mode.is_idle() && !self.grabbed {
                    self.select_at(scene, mouse, panel);
                }
            } else if moved {
                let delta = mouse - self.prev_mouse.world;
                self.drag(scene, mouse, delta, panel);
            }
        } else if self.prev_mouse.pressed {
            self.release();
        }

        self.prev_mouse = PrevMouseState {
            screen,
            world: mouse,
            pressed,
        };
    }

    /// Process one keyboard poll. Returns true if the camera zoomed.
    pub fn handle_keyboard_input(&mut self, scene: &mut Scene, input: &dyn InputSource) -> bool {
        match scene.camera_mut() {
            Some(camera) => self.camera_input.poll(camera, input),
            None => false,
        }
    }

    /// Select an object by id, or clear the selection with `None`
    pub fn set_selection(&mut self, scene: &Scene, id: Option<Uuid>, panel: &mut dyn DetailsPanel) {
        match id.and_then(|id| scene.object(id)) {
            Some(object) => {
                tracing::debug!("Selected '{}' ({})", object.name, object.id);
                self.selection = Some(object.id);
                self.gizmos = scene
                    .camera()
                    .map(|camera| GizmoSet::new(&object.transform, camera, &self.gizmo_config));
                panel.select(Some(object.id));
                panel.update_fields(object);
            }
            None => self.clear_selection(panel),
        }
    }

    /// Re-derive gizmo geometry from the live selection.
    ///
    /// Call once per frame. A selection whose object has left the scene is
    /// dropped and the panel is emptied.
    pub fn update_gizmos(&mut self, scene: &Scene, panel: &mut dyn DetailsPanel) {
        let Some(id) = self.selection else {
            self.gizmos = None;
            return;
        };

        let Some(object) = scene.object(id) else {
            tracing::warn!("Selected object {} no longer exists, clearing selection", id);
            self.set_mode(InteractionMode::Idle);
            self.clear_selection(panel);
            return;
        };

        let Some(camera) = scene.camera() else {
            return;
        };

        let ctx = GizmoContext {
            transform: &object.transform,
            camera,
        };
        match self.gizmos.as_mut() {
            Some(gizmos) => gizmos.update(&ctx),
            None => {
                self.gizmos = Some(GizmoSet::new(&object.transform, camera, &self.gizmo_config));
            }
        }
    }

    /// Submit the selection gizmos to a render backend
    pub fn draw_gizmos(&self, scene: &Scene, target: &mut dyn DrawTarget) {
        if let (Some(gizmos), Some(camera)) = (&self.gizmos, scene.camera()) {
            gizmos.draw(camera, target);
        }
    }

    fn select_at(&mut self, scene: &Scene, mouse: Vec2, panel: &mut dyn DetailsPanel) {
        let hit = self.hit_tester.pick(scene.instances(), mouse).map(|o| o.id);
        if hit.is_none() {
            tracing::debug!("Click at ({}, {}) hit nothing", mouse.x, mouse.y);
        }
        self.set_selection(scene, hit, panel);
        self.grabbed = self.selection.is_some();
    }

    fn clear_selection(&mut self, panel: &mut dyn DetailsPanel) {
        if let Some(id) = self.selection.take() {
            tracing::debug!("Deselected {}", id);
        }
        self.gizmos = None;
        self.grabbed = false;
        panel.select(None);
        panel.empty();
    }

    fn release(&mut self) {
        self.set_mode(InteractionMode::Idle);
        self.grabbed = false;
    }

    fn set_mode(&mut self, mode: InteractionMode) {
        if self.mode != mode {
            tracing::debug!(
                "Interaction {} -> {}",
                self.mode.display_name(),
                mode.display_name()
            );
            self.mode = mode;
        }
    }

    /// Region under the mouse when a drag starts
    fn classify_drag(&self, scene: &Scene, mouse: Vec2) -> InteractionMode {
        let object = match self.selection {
            Some(id) if self.grabbed => scene.object(id),
            _ => None,
        };
        let Some(object) = object else {
            return InteractionMode::PanningCamera;
        };

        match self.hit_tester.classify(&object.transform, mouse) {
            Some(HitRegion::RotationHandle) => InteractionMode::DraggingRotation,
            Some(HitRegion::Corner(corner)) => InteractionMode::corner(corner),
            Some(HitRegion::Body) => InteractionMode::DraggingBody,
            None => InteractionMode::PanningCamera,
        }
    }

    fn drag(&mut self, scene: &mut Scene, mouse: Vec2, delta: Vec2, panel: &mut dyn DetailsPanel) {
        if self.mode.is_idle() {
            let mode = self.classify_drag(scene, mouse);
            self.set_mode(mode);
        }

        match self.mode {
            InteractionMode::Idle => {}
            InteractionMode::PanningCamera => {
                if let Some(camera) = scene.camera_mut() {
                    let center = camera.wc_center() + delta;
                    camera.set_wc_center(center.x, center.y);
                }
            }
            mode => self.edit_selection(scene, mode, mouse, panel),
        }
    }

    fn edit_selection(
        &mut self,
        scene: &mut Scene,
        mode: InteractionMode,
        mouse: Vec2,
        panel: &mut dyn DetailsPanel,
    ) {
        let floor = self.config.effective_min_extent();
        let Some(object) = self.selection.and_then(|id| scene.object_mut(id)) else {
            tracing::warn!("Selection lost during {}", mode.display_name());
            self.set_mode(InteractionMode::Idle);
            self.clear_selection(panel);
            return;
        };

        let transform = &mut object.transform;
        match mode {
            InteractionMode::DraggingBody => transform.set_position(mouse),
            InteractionMode::DraggingCorner { top, left } => {
                resize_from_corner(transform, mouse, top, left, floor)
            }
            InteractionMode::DraggingRotation => rotate_towards(transform, mouse),
            InteractionMode::Idle | InteractionMode::PanningCamera => return,
        }
        tracing::trace!(
            x = transform.x(),
            y = transform.y(),
            width = transform.width(),
            height = transform.height(),
            rotation = transform.rotation_in_degree(),
            "Edited '{}'",
            object.name
        );

        panel.update_fields(object);
        panel.refresh_specific_content(TRANSFORM_CONTENT_ID);
    }
}

/// Centre-symmetric resize: the dragged corner follows the mouse and the
/// extents are mirrored through the centre. Both extents are floored.
fn resize_from_corner(t: &mut Transform, mouse: Vec2, top: bool, left: bool, floor: f32) {
    let mut width = 2.0 * (mouse.x - t.x());
    let mut height = 2.0 * (mouse.y - t.y());
    if left {
        width = -width;
    }
    if !top {
        height = -height;
    }
    t.set_width(width.max(floor));
    t.set_height(height.max(floor));
}

/// Point the rotation handle at the mouse
fn rotate_towards(t: &mut Transform, mouse: Vec2) {
    let d = mouse - t.position();
    t.set_rotation_in_degree(normalize_degrees(d.y.atan2(d.x).to_degrees()));
}

/// Wrap an angle into `[0, 360)`
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputSnapshot, Key};
    use crate::panels::{PanelEvent, RecordingDetailsPanel};
    use approx::assert_relative_eq;
    use se_core::SceneObject;
    use se_core::constants::MIN_EXTENT;
    use se_renderer::{Camera2D, PrimitiveBuffer};

    /// One pixel per world unit, world origin at screen (50, 50)
    fn scene() -> Scene {
        Scene::new(Camera2D::new(Vec2::ZERO, 100.0, Vec2::new(100.0, 100.0)))
    }

    fn scene_with_box() -> (Scene, Uuid) {
        let mut scene = scene();
        let id = scene.add_object(SceneObject::with_rect("box", Vec2::ZERO, 4.0, 4.0));
        (scene, id)
    }

    /// Input with the mouse over world point `(x, y)` of the initial camera
    fn at(x: f32, y: f32, pressed: bool) -> InputSnapshot {
        InputSnapshot::at(x + 50.0, 50.0 - y).with_left(pressed)
    }

    struct Harness {
        scene: Scene,
        controller: ManipulationController,
        panel: RecordingDetailsPanel,
    }

    impl Harness {
        fn new(scene: Scene) -> Self {
            Self {
                scene,
                controller: ManipulationController::default(),
                panel: RecordingDetailsPanel::new(),
            }
        }

        fn sample(&mut self, x: f32, y: f32, pressed: bool) {
            self.controller
                .handle_mouse_input(&mut self.scene, &at(x, y, pressed), &mut self.panel);
            self.controller.update_gizmos(&self.scene, &mut self.panel);
        }

        fn transform(&self, id: Uuid) -> Transform {
            self.scene.object(id).map(|o| o.transform).unwrap()
        }
    }

    #[test]
    fn test_click_selects_object() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(0.5, 0.5, true);
        assert_eq!(h.controller.selection(), Some(id));
        assert!(h.controller.is_grabbed());
        assert!(h.controller.gizmos().is_some());
        assert_eq!(h.controller.mode(), InteractionMode::Idle);
        assert_eq!(
            h.panel.events(),
            &[PanelEvent::Select(Some(id)), PanelEvent::UpdateFields(id)]
        );
    }

    #[test]
    fn test_click_on_empty_space_clears_selection() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(0.0, 0.0, true);
        h.sample(0.0, 0.0, false);
        assert_eq!(h.controller.selection(), Some(id));

        h.sample(30.0, 30.0, true);
        assert_eq!(h.controller.selection(), None);
        assert!(h.controller.gizmos().is_none());
        assert!(!h.controller.is_grabbed());
        assert_eq!(h.panel.last(), Some(&PanelEvent::Empty));
        assert!(h.panel.events().contains(&PanelEvent::Select(None)));
    }

    #[test]
    fn test_pick_uses_scene_order() {
        let mut scene = scene();
        let first = scene.add_object(SceneObject::with_rect("a", Vec2::ZERO, 4.0, 4.0));
        scene.add_object(SceneObject::with_rect("b", Vec2::ZERO, 4.0, 4.0));
        let mut h = Harness::new(scene);

        h.sample(0.0, 0.0, true);
        assert_eq!(h.controller.selection(), Some(first));
    }

    #[test]
    fn test_click_on_rotation_handle_selects() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        // Handle sits at (2.83, 0), outside the body
        h.sample(2.8, 0.0, true);
        assert_eq!(h.controller.selection(), Some(id));
    }

    #[test]
    fn test_press_sample_does_not_drag() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(1.0, 1.0, true);
        assert_eq!(h.transform(id).position(), Vec2::ZERO);
        assert_eq!(h.controller.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_body_drag_follows_mouse() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(0.0, 0.0, true);
        h.sample(1.0, 0.0, true);
        assert_eq!(h.controller.mode(), InteractionMode::DraggingBody);
        assert_eq!(h.transform(id).position(), Vec2::new(1.0, 0.0));

        // Stays a body drag even once the mouse leaves the starting box
        h.sample(3.0, 1.0, true);
        assert_eq!(h.controller.mode(), InteractionMode::DraggingBody);
        assert_eq!(h.transform(id).position(), Vec2::new(3.0, 1.0));
        assert_eq!(h.panel.refresh_count(), 2);

        h.sample(3.0, 1.0, false);
        assert_eq!(h.controller.mode(), InteractionMode::Idle);
        assert_eq!(h.controller.selection(), Some(id));
    }

    #[test]
    fn test_top_right_corner_drag() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(1.5, 1.5, true);
        h.sample(1.6, 1.6, true);
        assert_eq!(
            h.controller.mode(),
            InteractionMode::DraggingCorner { top: true, left: false }
        );

        h.sample(10.0, 0.0, true);
        let t = h.transform(id);
        assert_relative_eq!(t.width(), 20.0, epsilon = 1e-4);
        // Mouse level with the centre collapses the height to the floor
        assert_eq!(t.height(), MIN_EXTENT);
        assert_eq!(t.position(), Vec2::ZERO);
    }

    #[test]
    fn test_left_and_bottom_corners_mirror_extents() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(-1.5, 1.5, true);
        h.sample(-1.6, 1.6, true);
        assert_eq!(
            h.controller.mode(),
            InteractionMode::DraggingCorner { top: true, left: true }
        );
        h.sample(-3.0, 3.0, true);
        assert_relative_eq!(h.transform(id).width(), 6.0, epsilon = 1e-4);
        assert_relative_eq!(h.transform(id).height(), 6.0, epsilon = 1e-4);
        h.sample(-3.0, 3.0, false);

        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);
        h.sample(1.5, -1.5, true);
        h.sample(1.6, -1.6, true);
        assert_eq!(h.controller.mode().dragged_corner(), Some(se_core::Corner::BottomRight));
        h.sample(4.0, -2.0, true);
        assert_relative_eq!(h.transform(id).width(), 8.0, epsilon = 1e-4);
        assert_relative_eq!(h.transform(id).height(), 4.0, epsilon = 1e-4);
    }

    #[test]
    fn test_resize_converges_to_floor() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(1.5, 1.5, true);
        h.sample(1.6, 1.6, true);
        for step in [1.0, 0.5, 0.1, 0.01, 0.0, -5.0] {
            h.sample(step, step, true);
            let t = h.transform(id);
            assert!(t.width() >= MIN_EXTENT);
            assert!(t.height() >= MIN_EXTENT);
        }
        assert_eq!(h.transform(id).width(), MIN_EXTENT);
        assert_eq!(h.transform(id).height(), MIN_EXTENT);
    }

    #[test]
    fn test_configured_floor_is_respected() {
        let (scene, id) = scene_with_box();
        let config = ManipulationConfig {
            min_extent: 1.0,
            ..ManipulationConfig::default()
        };
        let mut h = Harness::new(scene);
        h.controller = ManipulationController::new(config, GizmoConfig::default());

        h.sample(1.5, 1.5, true);
        h.sample(1.6, 1.6, true);
        h.sample(0.0, 0.0, true);
        assert_eq!(h.transform(id).width(), 1.0);
        assert_eq!(h.transform(id).height(), 1.0);
    }

    #[test]
    fn test_rotation_drag_normalizes_to_270() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(2.8, 0.0, true);
        h.sample(2.9, 0.0, true);
        assert_eq!(h.controller.mode(), InteractionMode::DraggingRotation);
        assert_relative_eq!(h.transform(id).rotation_in_degree(), 0.0, epsilon = 1e-3);

        h.sample(0.0, -5.0, true);
        assert_relative_eq!(h.transform(id).rotation_in_degree(), 270.0, epsilon = 1e-3);
        assert_eq!(h.transform(id).size(), Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_rotation_stays_in_range() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(2.8, 0.0, true);
        h.sample(2.9, 0.0, true);
        for i in 0..36 {
            let angle = (i as f32 * 10.0 + 5.0).to_radians();
            h.sample(10.0 * angle.cos(), 10.0 * angle.sin(), true);
            let degrees = h.transform(id).rotation_in_degree();
            assert!((0.0..360.0).contains(&degrees), "angle {degrees}");
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert!(normalize_degrees(-1e-6) < 360.0);
        assert!(normalize_degrees(-1e-6) >= 0.0);
    }

    #[test]
    fn test_drag_on_empty_space_pans_camera() {
        let (scene, _) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(30.0, 30.0, true);
        h.sample(32.0, 31.0, true);
        assert_eq!(h.controller.mode(), InteractionMode::PanningCamera);
        assert_eq!(h.scene.camera().map(|c| c.wc_center()), Some(Vec2::new(2.0, 1.0)));

        h.sample(32.0, 31.0, false);
        assert_eq!(h.controller.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_pan_delta_includes_previous_shift() {
        let mut h = Harness::new(scene());
        let mut sample = |x: f32| {
            let input = InputSnapshot::at(x, 50.0).with_left(true);
            h.controller.handle_mouse_input(&mut h.scene, &input, &mut h.panel);
            h.scene.camera().map(|c| c.wc_center().x)
        };

        // The previous world point was mapped before the last shift, so each
        // step moves by the screen delta plus the previous shift.
        assert_eq!(sample(80.0), Some(0.0));
        assert_eq!(sample(82.0), Some(2.0));
        assert_eq!(sample(84.0), Some(6.0));
        assert_eq!(sample(86.0), Some(12.0));
        assert_eq!(h.controller.prev_mouse().world, Vec2::new(42.0, 0.0));
    }

    #[test]
    fn test_drag_off_selection_pans_and_keeps_selection() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(0.0, 0.0, true);
        h.sample(20.0, 20.0, true);
        assert_eq!(h.controller.mode(), InteractionMode::PanningCamera);
        assert_eq!(h.controller.selection(), Some(id));
        assert_eq!(h.transform(id).position(), Vec2::ZERO);
        assert_eq!(h.scene.camera().map(|c| c.wc_center()), Some(Vec2::new(20.0, 20.0)));
    }

    #[test]
    fn test_release_always_returns_to_idle() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(2.8, 0.0, true);
        h.sample(2.9, 0.0, true);
        assert_eq!(h.controller.mode(), InteractionMode::DraggingRotation);
        h.sample(2.9, 0.0, false);
        assert_eq!(h.controller.mode(), InteractionMode::Idle);
        assert!(!h.controller.is_grabbed());
        assert_eq!(h.controller.selection(), Some(id));
        assert!(!h.controller.prev_mouse().pressed);
    }

    #[test]
    fn test_no_camera_skips_sample() {
        let (mut scene, _) = scene_with_box();
        scene.camera = None;
        let mut h = Harness::new(scene);

        h.sample(0.0, 0.0, true);
        assert_eq!(h.controller.selection(), None);
        assert_eq!(h.controller.prev_mouse(), PrevMouseState::default());
        assert!(h.panel.events().is_empty());
    }

    #[test]
    fn test_prev_mouse_records_sample() {
        let (scene, _) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(3.0, -2.0, true);
        let prev = h.controller.prev_mouse();
        assert!(prev.pressed);
        assert_eq!(prev.screen, Vec2::new(53.0, 52.0));
        assert_eq!((prev.x(), prev.y()), (3.0, -2.0));
    }

    #[test]
    fn test_keyboard_zoom() {
        let (mut scene, _) = scene_with_box();
        let mut controller = ManipulationController::default();

        let up = InputSnapshot::default().with_key(Key::Up, true);
        assert!(controller.handle_keyboard_input(&mut scene, &up));
        assert_eq!(scene.camera().map(|c| c.wc_width()), Some(50.0));

        scene.camera = None;
        assert!(!controller.handle_keyboard_input(&mut scene, &up));
    }

    #[test]
    fn test_gizmos_follow_edits() {
        let (scene, _) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(0.0, 0.0, true);
        h.sample(1.0, 0.0, true);
        h.sample(5.0, 5.0, true);
        let gizmos = h.controller.gizmos().unwrap();
        assert_eq!(gizmos.rotation.line().start(), Vec2::new(5.0, 5.0));
        assert_eq!(gizmos.resize.arm().start(), Vec2::new(7.0, 7.0));
    }

    #[test]
    fn test_removed_selection_is_dropped() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        h.sample(0.0, 0.0, true);
        h.sample(1.0, 0.0, true);
        assert_eq!(h.controller.mode(), InteractionMode::DraggingBody);

        h.scene.remove_object(id);
        h.controller.update_gizmos(&h.scene, &mut h.panel);
        assert_eq!(h.controller.selection(), None);
        assert_eq!(h.controller.mode(), InteractionMode::Idle);
        assert!(h.controller.gizmos().is_none());
        assert_eq!(h.panel.last(), Some(&PanelEvent::Empty));
    }

    #[test]
    fn test_draw_gizmos() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        let mut buffer = PrimitiveBuffer::new();
        h.controller.draw_gizmos(&h.scene, &mut buffer);
        assert!(buffer.is_empty());

        h.controller.set_selection(&h.scene, Some(id), &mut h.panel);
        h.controller.draw_gizmos(&h.scene, &mut buffer);
        assert_eq!(buffer.lines().len(), 2);
        assert_eq!(buffer.quads().len(), 2);
    }

    #[test]
    fn test_set_selection() {
        let (scene, id) = scene_with_box();
        let mut h = Harness::new(scene);

        h.controller.set_selection(&h.scene, Some(id), &mut h.panel);
        assert_eq!(h.controller.selection(), Some(id));
        assert!(!h.controller.is_grabbed());

        h.controller.set_selection(&h.scene, Some(Uuid::new_v4()), &mut h.panel);
        assert_eq!(h.controller.selection(), None);
        assert_eq!(h.panel.last(), Some(&PanelEvent::Empty));
    }
}
