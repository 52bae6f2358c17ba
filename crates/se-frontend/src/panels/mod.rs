//! Details panel interface
//!
//! The widgets live in the host UI. The controller only needs to tell the
//! panel what is selected and when the transform fields are stale.

use se_core::SceneObject;
use uuid::Uuid;

/// Content id of the transform section in the details panel
pub const TRANSFORM_CONTENT_ID: &str = "#TransformContent";

/// Details panel as seen by the manipulation controller
pub trait DetailsPanel {
    /// Selection changed
    fn select(&mut self, id: Option<Uuid>);

    /// Re-read all fields from the object
    fn update_fields(&mut self, object: &SceneObject);

    /// Refresh one content section by id
    fn refresh_specific_content(&mut self, content_id: &str);

    /// Show the empty (nothing selected) state
    fn empty(&mut self);
}

/// Notification received by a [`RecordingDetailsPanel`]
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    Select(Option<Uuid>),
    UpdateFields(Uuid),
    RefreshContent(String),
    Empty,
}

/// Details panel that records every notification.
///
/// Used by the replay host and tests in place of real widgets.
#[derive(Debug, Default, Clone)]
pub struct RecordingDetailsPanel {
    events: Vec<PanelEvent>,
}

impl RecordingDetailsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications so far
    pub fn events(&self) -> &[PanelEvent] {
        &self.events
    }

    /// Drain the recorded notifications
    pub fn take_events(&mut self) -> Vec<PanelEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of transform-section refreshes
    pub fn refresh_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PanelEvent::RefreshContent(id) if id == TRANSFORM_CONTENT_ID))
            .count()
    }

    pub fn last(&self) -> Option<&PanelEvent> {
        self.events.last()
    }
}

impl DetailsPanel for RecordingDetailsPanel {
    fn select(&mut self, id: Option<Uuid>) {
        self.events.push(PanelEvent::Select(id));
    }

    fn update_fields(&mut self, object: &SceneObject) {
        self.events.push(PanelEvent::UpdateFields(object.id));
    }

    fn refresh_specific_content(&mut self, content_id: &str) {
        self.events.push(PanelEvent::RefreshContent(content_id.to_string()));
    }

    fn empty(&mut self) {
        self.events.push(PanelEvent::Empty);
    }
}
