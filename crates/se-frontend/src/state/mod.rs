//! Editor state

mod interaction;

pub use interaction::{InteractionMode, PrevMouseState};

use se_core::SceneObject;
use se_renderer::Camera2D;
use uuid::Uuid;

/// Scene the controller manipulates
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Active camera; `None` until the host has set one up
    pub camera: Option<Camera2D>,
    /// Objects in hit-test order
    instances: Vec<SceneObject>,
}

impl Scene {
    /// Create an empty scene with a camera
    pub fn new(camera: Camera2D) -> Self {
        Self {
            camera: Some(camera),
            instances: Vec::new(),
        }
    }

    pub fn camera(&self) -> Option<&Camera2D> {
        self.camera.as_ref()
    }

    pub fn camera_mut(&mut self) -> Option<&mut Camera2D> {
        self.camera.as_mut()
    }

    /// Objects in hit-test order
    pub fn instances(&self) -> &[SceneObject] {
        &self.instances
    }

    /// Append an object, returning its id
    pub fn add_object(&mut self, object: SceneObject) -> Uuid {
        let id = object.id;
        self.instances.push(object);
        id
    }

    /// Remove an object by id
    pub fn remove_object(&mut self, id: Uuid) -> Option<SceneObject> {
        let index = self.instances.iter().position(|o| o.id == id)?;
        Some(self.instances.remove(index))
    }

    pub fn object(&self, id: Uuid) -> Option<&SceneObject> {
        self.instances.iter().find(|o| o.id == id)
    }

    pub fn object_mut(&mut self, id: Uuid) -> Option<&mut SceneObject> {
        self.instances.iter_mut().find(|o| o.id == id)
    }
}
