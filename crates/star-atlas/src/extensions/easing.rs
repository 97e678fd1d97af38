// extensions/easing.rs
//
// Easing curves and interpolation helpers for view animation.
// Pure math, no view state.

use glam::DVec2;

/// Maps linear progress in [0, 1] to eased progress in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Slow start.
    CubicIn,
    /// Slow end.
    CubicOut,
    /// Slow start and end.
    #[default]
    CubicInOut,
}

impl Easing {
    /// Input is clamped to [0, 1].
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_dvec2(a: DVec2, b: DVec2, t: f64) -> DVec2 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f64, b: f64, t: f64, easing: Easing) -> f64 {
    lerp(a, b, easing.apply(t))
}

#[inline]
pub fn ease_dvec2(a: DVec2, b: DVec2, t: f64, easing: Easing) -> DVec2 {
    lerp_dvec2(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::CubicIn, Easing::CubicOut, Easing::CubicInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn cubic_in_out_is_symmetric() {
        assert!((Easing::CubicInOut.apply(0.5) - 0.5).abs() < 1e-12);
        let a = Easing::CubicInOut.apply(0.2);
        let b = Easing::CubicInOut.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-12);
        assert!(a < 0.2, "slow start, got {a}");
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::CubicInOut.apply(-3.0), 0.0);
        assert_eq!(Easing::CubicInOut.apply(7.0), 1.0);
    }

    #[test]
    fn ease_interpolates() {
        let result = ease(100.0, 200.0, 0.5, Easing::Linear);
        assert!((result - 150.0).abs() < 1e-12);
        let v = ease_dvec2(DVec2::ZERO, DVec2::new(10.0, -10.0), 1.0, Easing::CubicInOut);
        assert_eq!(v, DVec2::new(10.0, -10.0));
    }
}
