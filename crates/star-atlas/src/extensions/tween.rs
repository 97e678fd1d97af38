// extensions/tween.rs
//
// Time-based interpolation of the view (center + zoom).
// Driven by absolute clock readings so a paused host resumes correctly.
//
// Usage:
//   let tween = ViewTween::new(from, to, clock.now_ms(), 600.0, Easing::CubicInOut);
//   let frame = tween.sample(clock.now_ms());
//   view.set_view(frame.center, frame.zoom);

use glam::DVec2;

use super::easing::{ease, ease_dvec2, Easing};

/// A view pose: what the map is centered on and how far it is zoomed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPose {
    pub center: DVec2,
    pub zoom: f64,
}

impl ViewPose {
    pub fn new(center: DVec2, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

/// One animated transition between two poses.
#[derive(Debug, Clone, Copy)]
pub struct ViewTween {
    pub from: ViewPose,
    pub to: ViewPose,
    /// Clock reading at which the tween started.
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl ViewTween {
    pub fn new(from: ViewPose, to: ViewPose, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Linear progress in [0, 1]. A non-positive duration is complete
    /// immediately.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if !(self.duration_ms > 0.0) {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Interpolated pose at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> ViewPose {
        let t = self.progress(now_ms);
        ViewPose {
            center: ease_dvec2(self.from.center, self.to.center, t, self.easing),
            zoom: ease(self.from.zoom, self.to.zoom, t, self.easing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween() -> ViewTween {
        ViewTween::new(
            ViewPose::new(DVec2::ZERO, 1.0),
            ViewPose::new(DVec2::new(100.0, 50.0), 5.0),
            1000.0,
            500.0,
            Easing::CubicInOut,
        )
    }

    #[test]
    fn samples_hit_endpoints() {
        let t = tween();
        assert_eq!(t.sample(1000.0), t.from);
        assert_eq!(t.sample(1500.0), t.to);
        assert_eq!(t.sample(99_999.0), t.to);
        assert_eq!(t.sample(0.0), t.from);
    }

    #[test]
    fn midpoint_is_halfway_for_symmetric_curve() {
        let mid = tween().sample(1250.0);
        assert!((mid.center - DVec2::new(50.0, 25.0)).length() < 1e-9);
        assert!((mid.zoom - 3.0).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_finishes_at_once() {
        let mut t = tween();
        t.duration_ms = 0.0;
        assert!(t.is_finished(1000.0));
        assert_eq!(t.sample(1000.0), t.to);
    }
}
