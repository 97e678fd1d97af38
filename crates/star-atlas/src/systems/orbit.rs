//! Orbital animator: advances planet angles with elapsed time.
//!
//! angle(t) = θ₀ + t · k / √d, so closer orbits turn faster. Cosmetic only.

use glam::DVec3;

use crate::api::config::AnimationConfig;
use crate::components::planet::Orbit;

#[derive(Debug, Clone)]
pub struct OrbitalAnimator {
    /// Degrees per second at distance 1.
    speed: f64,
    enabled: bool,
    /// Clock reading that counts as t = 0.
    origin_ms: f64,
}

impl OrbitalAnimator {
    pub fn new(config: &AnimationConfig, origin_ms: f64) -> Self {
        Self {
            speed: config.orbit_speed,
            enabled: config.orbits_enabled,
            origin_ms,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        log::info!("orbital animation {}", if self.enabled { "on" } else { "off" });
        self.enabled
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Restart the timeline at `origin_ms`.
    pub fn restart(&mut self, origin_ms: f64) {
        self.origin_ms = origin_ms;
    }

    /// Seconds since the timeline origin; 0 while disabled.
    pub fn elapsed_secs(&self, now_ms: f64) -> f64 {
        if !self.enabled {
            return 0.0;
        }
        ((now_ms - self.origin_ms) / 1000.0).max(0.0)
    }

    /// Angular speed in degrees per second. Zero for non-positive or
    /// non-finite distances.
    pub fn angular_speed(&self, distance: f64) -> f64 {
        if !(distance > 0.0) || !distance.is_finite() {
            return 0.0;
        }
        self.speed / distance.sqrt()
    }

    /// Angle in degrees after `t` seconds.
    pub fn angle_at(&self, base_deg: f64, distance: f64, t: f64) -> f64 {
        base_deg + t * self.angular_speed(distance)
    }

    /// Orbit with its angle advanced to `now_ms`.
    pub fn advance(&self, orbit: &Orbit, now_ms: f64) -> Orbit {
        let t = self.elapsed_secs(now_ms);
        orbit.at_angle(self.angle_at(orbit.angle_deg, orbit.distance, t))
    }

    /// Absolute planet position at `now_ms` for a star at `star`.
    pub fn position(&self, orbit: &Orbit, star: DVec3, now_ms: f64) -> DVec3 {
        self.advance(orbit, now_ms).absolute(star)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> OrbitalAnimator {
        OrbitalAnimator::new(&AnimationConfig::default(), 0.0)
    }

    #[test]
    fn closer_orbits_turn_faster() {
        let a = animator();
        assert!(a.angular_speed(1.0) > a.angular_speed(4.0));
        assert!((a.angular_speed(4.0) - a.angular_speed(1.0) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn angle_follows_inverse_sqrt() {
        let a = animator();
        // k = 20 deg/s, d = 4 -> 10 deg/s.
        assert!((a.angle_at(30.0, 4.0, 3.0) - 60.0).abs() < 1e-12);
    }

    #[test]
    fn disabled_animation_is_static() {
        let mut a = animator();
        a.set_enabled(false);
        let orbit = Orbit { distance: 2.0, angle_deg: 45.0, inclination_deg: 1.0 };
        let star = DVec3::new(10.0, 0.0, 0.0);
        assert_eq!(a.position(&orbit, star, 50_000.0), orbit.absolute(star));
    }

    #[test]
    fn degenerate_distance_does_not_move() {
        let a = animator();
        assert_eq!(a.angle_at(12.0, 0.0, 100.0), 12.0);
        assert_eq!(a.angle_at(12.0, -3.0, 100.0), 12.0);
    }

    #[test]
    fn time_before_origin_counts_as_zero() {
        let a = OrbitalAnimator::new(&AnimationConfig::default(), 1000.0);
        assert_eq!(a.elapsed_secs(500.0), 0.0);
        assert_eq!(a.elapsed_secs(3000.0), 2.0);
    }

    #[test]
    fn advanced_planet_stays_on_its_orbit() {
        let a = animator();
        let orbit = Orbit { distance: 5.0, angle_deg: 0.0, inclination_deg: 3.0 };
        let star = DVec3::new(-4.0, 2.0, 9.0);
        let p = a.position(&orbit, star, 7_250.0);
        assert!((p.distance(star) - 5.0).abs() < 1e-9);
    }
}
