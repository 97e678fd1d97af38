/// Frame header shared with the host renderer.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values f32):
/// ```text
/// [Header: HEADER_FLOATS]
/// bodies: body_count × INSTANCE_FLOATS   (separate buffer, see body_ptr)
/// lines:  line_count × INSTANCE_FLOATS   (separate buffer, see line_ptr)
/// ```
///
/// The host reads the header first to learn how many instances to read from
/// each buffer.
use crate::api::session::AtlasSession;

pub use crate::renderer::instance::INSTANCE_FLOATS;

/// Number of floats in the header.
pub const HEADER_FLOATS: usize = 12;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_BODY_COUNT: usize = 2;
pub const HEADER_LINE_COUNT: usize = 3;
/// `EntityRef::wire_id` of the selection, 0 when nothing is selected.
pub const HEADER_SELECTION: usize = 4;
pub const HEADER_ZOOM: usize = 5;
pub const HEADER_CENTER_X: usize = 6;
pub const HEADER_CENTER_Y: usize = 7;
pub const HEADER_PLANE: usize = 8;
pub const HEADER_SURFACE_WIDTH: usize = 9;
pub const HEADER_SURFACE_HEIGHT: usize = 10;
/// 1.0 while a view animation is running.
pub const HEADER_ANIMATING: usize = 11;

pub const PROTOCOL_VERSION: f32 = 1.0;

/// Snapshot of the session state the host needs every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameHeader {
    pub floats: [f32; HEADER_FLOATS],
}

impl FrameHeader {
    pub fn from_session(session: &AtlasSession) -> Self {
        let mut floats = [0.0f32; HEADER_FLOATS];
        let view = session.controller().view();
        floats[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        floats[HEADER_FRAME_COUNTER] = session.frame_counter() as f32;
        floats[HEADER_BODY_COUNT] = session.bodies().instance_count() as f32;
        floats[HEADER_LINE_COUNT] = session.lines().instance_count() as f32;
        floats[HEADER_SELECTION] = session.selection().map_or(0.0, |e| e.wire_id());
        floats[HEADER_ZOOM] = view.zoom() as f32;
        floats[HEADER_CENTER_X] = view.center().x as f32;
        floats[HEADER_CENTER_Y] = view.center().y as f32;
        floats[HEADER_PLANE] = session.plane().index() as f32;
        floats[HEADER_SURFACE_WIDTH] = view.size().x as f32;
        floats[HEADER_SURFACE_HEIGHT] = view.size().y as f32;
        floats[HEADER_ANIMATING] = if session.controller().is_animating() { 1.0 } else { 0.0 };
        Self { floats }
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.floats.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::AtlasConfig;
    use crate::core::time::ManualClock;

    #[test]
    fn header_reflects_empty_session() {
        let mut session = AtlasSession::new(AtlasConfig::default(), 640.0, 480.0);
        session.tick(&ManualClock::new(0.0));
        let header = FrameHeader::from_session(&session);
        assert_eq!(header.floats[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header.floats[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(header.floats[HEADER_BODY_COUNT], 0.0);
        assert_eq!(header.floats[HEADER_SELECTION], 0.0);
        assert_eq!(header.floats[HEADER_SURFACE_WIDTH], 640.0);
        assert_eq!(header.floats[HEADER_SURFACE_HEIGHT], 480.0);
    }

    #[test]
    fn field_indices_fit_header() {
        assert!(HEADER_ANIMATING < HEADER_FLOATS);
        assert_eq!(INSTANCE_FLOATS, 8);
    }
}
