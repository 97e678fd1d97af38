use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use star_atlas::{
    AtlasConfig, AtlasSession, Clock, ConfigError, FrameClock, FrameHeader, InputEvent, ProjectionPlane,
    StoreError, SystemId, ViewCommand,
};

/// Owns one map session and its frame clock.
///
/// The wasm exports keep a single `thread_local!` AtlasRunner and forward
/// every call to it, because wasm-bindgen cannot export a session directly.
pub struct AtlasRunner {
    session: AtlasSession,
    clock: FrameClock,
    header: FrameHeader,
    /// Host timestamp of the previous tick, for frame deltas.
    last_host_ms: Option<f64>,
}

impl AtlasRunner {
    /// Generate a universe of `system_count` systems from `seed`.
    pub fn new(
        config: AtlasConfig,
        seed: u64,
        system_count: usize,
        width: f64,
        height: f64,
    ) -> Result<Self, StoreError> {
        let max_step = config.animation.max_frame_step_ms;
        let min_distance = config.generation.nearby_min_distance;
        let mut session = AtlasSession::new(config, width, height);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        session.generate(&mut rng, system_count, min_distance)?;
        let header = FrameHeader::from_session(&session);
        Ok(Self {
            session,
            clock: FrameClock::new(max_step),
            header,
            last_host_ms: None,
        })
    }

    pub fn session(&self) -> &AtlasSession {
        &self.session
    }

    /// Replace the config; the frame clock picks up the new step cap.
    pub fn load_config(&mut self, json: &str) -> Result<(), ConfigError> {
        self.session.load_config(json)?;
        self.clock
            .set_max_step(self.session.config().animation.max_frame_step_ms);
        Ok(())
    }

    /// Frame-clock time in ms. Pointer events are stamped with it.
    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.session.push_event(event);
    }

    pub fn command(&mut self, command: ViewCommand) {
        self.session.push_event(InputEvent::Command(command));
    }

    pub fn set_plane_index(&mut self, index: u32) {
        match ProjectionPlane::from_index(index) {
            Some(plane) => self.command(ViewCommand::SetPlane(plane)),
            None => log::warn!("ignoring unknown projection plane {index}"),
        }
    }

    pub fn focus_system(&mut self, id: u32) {
        self.command(ViewCommand::Focus(SystemId(id).into()));
    }

    /// Advance by a host frame delta and rebuild the frame.
    pub fn tick(&mut self, dt_ms: f64) {
        self.clock.accumulate(dt_ms);
        self.session.tick(&self.clock);
        self.header = FrameHeader::from_session(&self.session);
    }

    /// Advance to an absolute host timestamp.
    pub fn tick_at(&mut self, host_ms: f64) {
        let dt = self.last_host_ms.map_or(0.0, |last| host_ms - last);
        self.last_host_ms = Some(host_ms);
        self.tick(dt);
    }

    // ---- Pointer accessors for reads from wasm memory ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn body_ptr(&self) -> *const f32 {
        self.session.bodies().instances_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.session.bodies().instance_count()
    }

    pub fn line_ptr(&self) -> *const f32 {
        self.session.lines().instances_ptr()
    }

    pub fn line_count(&self) -> u32 {
        self.session.lines().instance_count()
    }

    /// Wire id of the selection; 0 when nothing is selected.
    pub fn selection_id(&self) -> f32 {
        self.session.selection().map_or(0.0, |e| e.wire_id())
    }

    pub fn zoom(&self) -> f64 {
        self.session.zoom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> AtlasRunner {
        AtlasRunner::new(AtlasConfig::default(), 7, 12, 800.0, 600.0).unwrap()
    }

    #[test]
    fn first_tick_fills_buffers() {
        let mut r = runner();
        r.tick(16.0);
        assert_eq!(r.body_count(), 12);
        assert!(r.line_count() > 0);
        assert_eq!(r.session().frame_counter(), 1);
    }

    #[test]
    fn same_seed_same_universe() {
        let a = runner();
        let b = runner();
        let names_a: Vec<_> = a.session().systems().iter().map(|s| s.name.clone()).collect();
        let names_b: Vec<_> = b.session().systems().iter().map(|s| s.name.clone()).collect();
        assert_eq!(names_a, names_b);
    }

    #[test]
    fn unknown_plane_is_ignored() {
        let mut r = runner();
        r.set_plane_index(9);
        r.tick(16.0);
        assert_eq!(r.session().plane(), ProjectionPlane::XY);
        r.set_plane_index(1);
        r.tick(16.0);
        assert_eq!(r.session().plane(), ProjectionPlane::XZ);
    }

    #[test]
    fn focus_selects_system() {
        let mut r = runner();
        let id = r.session().systems()[0].id;
        r.focus_system(id.0);
        r.tick(16.0);
        assert_eq!(r.selection_id(), id.0 as f32);
    }

    #[test]
    fn host_timestamps_become_deltas() {
        let mut r = runner();
        r.tick_at(1000.0);
        r.tick_at(1016.0);
        assert_eq!(r.session().frame_counter(), 2);
    }

    #[test]
    fn loaded_config_caps_frame_steps() {
        let mut r = runner();
        r.tick(10.0);
        r.load_config(r#"{"animation":{"max_frame_step_ms":20}}"#).unwrap();
        r.tick(100.0);
        assert_eq!(r.now_ms(), 30.0);
    }

    #[test]
    fn rejected_config_keeps_the_old_cap() {
        let mut r = runner();
        assert!(r.load_config("not json").is_err());
        r.tick(50.0);
        assert_eq!(r.now_ms(), 50.0);
    }
}
