//! Clock capability for animation timing.

/// A monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Clock whose time is set explicitly. Used for tests and replays.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: start_ms }
    }

    pub fn set(&mut self, now_ms: f64) {
        self.now = now_ms;
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.now += dt_ms.max(0.0);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now
    }
}

/// Clock driven by per-frame deltas from the host's frame callback.
/// Large deltas (tab in background) are capped so animations don't jump.
pub struct FrameClock {
    now: f64,
    max_step_ms: f64,
}

/// Step cap used when the requested one is not a positive number.
const FALLBACK_MAX_STEP_MS: f64 = 100.0;

fn usable_step(max_step_ms: f64) -> f64 {
    if max_step_ms.is_finite() && max_step_ms > 0.0 {
        max_step_ms
    } else {
        log::warn!("frame step cap {max_step_ms} unusable, using {FALLBACK_MAX_STEP_MS}");
        FALLBACK_MAX_STEP_MS
    }
}

impl FrameClock {
    pub fn new(max_step_ms: f64) -> Self {
        Self {
            now: 0.0,
            max_step_ms: usable_step(max_step_ms),
        }
    }

    /// Change the step cap. Elapsed time is kept.
    pub fn set_max_step(&mut self, max_step_ms: f64) {
        self.max_step_ms = usable_step(max_step_ms);
    }

    /// Add frame time. Returns the delta actually applied.
    /// Negative and NaN deltas count as zero.
    pub fn accumulate(&mut self, frame_dt_ms: f64) -> f64 {
        let dt = frame_dt_ms.max(0.0).min(self.max_step_ms);
        self.now += dt;
        dt
    }

    /// Elapsed seconds since the clock started.
    pub fn elapsed_secs(&self) -> f64 {
        self.now / 1000.0
    }
}

impl Clock for FrameClock {
    fn now_ms(&self) -> f64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let mut clock = ManualClock::new(100.0);
        clock.advance(16.0);
        assert_eq!(clock.now_ms(), 116.0);
        clock.advance(-5.0);
        assert_eq!(clock.now_ms(), 116.0);
    }

    #[test]
    fn frame_clock_caps_large_steps() {
        let mut clock = FrameClock::new(100.0);
        assert_eq!(clock.accumulate(16.0), 16.0);
        assert_eq!(clock.accumulate(5000.0), 100.0);
        assert!((clock.now_ms() - 116.0).abs() < 1e-9);
        assert!((clock.elapsed_secs() - 0.116).abs() < 1e-9);
    }

    #[test]
    fn unusable_step_cap_does_not_panic() {
        let mut clock = FrameClock::new(-5.0);
        assert_eq!(clock.accumulate(500.0), FALLBACK_MAX_STEP_MS);
        assert_eq!(clock.accumulate(f64::NAN), 0.0);
        assert_eq!(clock.accumulate(-20.0), 0.0);
    }

    #[test]
    fn step_cap_can_change_without_resetting_time() {
        let mut clock = FrameClock::new(100.0);
        clock.accumulate(50.0);
        clock.set_max_step(20.0);
        assert_eq!(clock.accumulate(50.0), 20.0);
        assert!((clock.now_ms() - 70.0).abs() < 1e-9);
    }
}
