use crate::api::types::EntityRef;
use crate::renderer::projection::ProjectionPlane;

/// Programmatic view changes delivered alongside pointer input
/// (toolbar buttons, keyboard shortcuts).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    /// Switch projection plane and refit the view.
    SetPlane(ProjectionPlane),
    /// Refit the view to every entity.
    ResetView,
    /// The rendering surface changed size (pixels).
    Resize { width: f64, height: f64 },
    /// Animate toward an entity and its neighbours.
    Focus(EntityRef),
    ToggleOrbits,
}

/// Input events the map understands. Coordinates are surface pixels,
/// timestamps are host milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began.
    PointerDown { x: f64, y: f64, time_ms: f64 },
    /// A touch/cursor moved.
    PointerMove { x: f64, y: f64, time_ms: f64 },
    /// A touch/click ended.
    PointerUp { x: f64, y: f64, time_ms: f64 },
    /// Scroll at (x, y). Positive `notches` zoom in.
    Wheel { x: f64, y: f64, notches: f64, time_ms: f64 },
    Command(ViewCommand),
}

/// A queue of input events.
/// The host pushes events as they arrive; the session drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_keeps_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0, time_ms: 1.0 });
        q.push(InputEvent::Command(ViewCommand::ToggleOrbits));
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], InputEvent::PointerDown { .. }));
        assert_eq!(events[1], InputEvent::Command(ViewCommand::ToggleOrbits));
        assert!(q.is_empty());
    }

    #[test]
    fn plane_command_carries_plane() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Command(ViewCommand::SetPlane(ProjectionPlane::YZ)));
        match q.drain()[0] {
            InputEvent::Command(ViewCommand::SetPlane(plane)) => assert_eq!(plane, ProjectionPlane::YZ),
            other => panic!("unexpected event {other:?}"),
        }
    }
}
