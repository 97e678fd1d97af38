//! Orbital placement and the orbital-to-absolute conversion.
//!
//! The orbit is cosmetic: distances follow the planet index inside-out with
//! jitter, angles are spread evenly around the star.

use glam::DVec3;

use crate::api::config::GenerationConfig;
use crate::components::planet::Orbit;
use crate::core::random::RandomSource;

impl Orbit {
    /// Offset of the planet from its star.
    ///
    /// The distance is laid onto the orbital plane with cos/sin of the angle,
    /// then the plane is tilted: the secondary axis keeps cos(inclination) of
    /// the in-plane component and the tertiary axis receives sin(inclination).
    pub fn offset(&self) -> DVec3 {
        let angle = self.angle_deg.to_radians();
        let tilt = self.inclination_deg.to_radians();
        let in_plane = self.distance * angle.sin();
        DVec3::new(
            self.distance * angle.cos(),
            in_plane * tilt.cos(),
            in_plane * tilt.sin(),
        )
    }

    /// Absolute position for a star at `star`.
    pub fn absolute(&self, star: DVec3) -> DVec3 {
        star + self.offset()
    }

    /// Same orbit with a different angle.
    pub fn at_angle(self, angle_deg: f64) -> Self {
        Self { angle_deg, ..self }
    }
}

/// Orbit for planet `index` of `count` around one star.
///
/// Distance interpolates the configured band by (index+1)/(count+1) and is
/// then scaled by a ±jitter factor, so neighbouring indices can occasionally
/// swap order. Angles are spaced 360/count apart with a small ± jitter.
pub fn place_orbit(
    index: usize,
    count: usize,
    config: &GenerationConfig,
    rng: &mut dyn RandomSource,
) -> Orbit {
    let count = count.max(1);
    let fraction = (index as f64 + 1.0) / (count as f64 + 1.0);
    let band = config.orbit_max_distance - config.orbit_min_distance;
    let base = config.orbit_min_distance + band * fraction;
    let jitter = config.orbit_distance_jitter;
    let distance = base * (1.0 + rng.next_range(-jitter, jitter));

    let spacing = 360.0 / count as f64;
    let angle_jitter = config.orbit_angle_jitter_deg;
    let angle_deg = index as f64 * spacing + rng.next_range(-angle_jitter, angle_jitter);

    let tilt = config.max_inclination_deg;
    let inclination_deg = rng.next_range(-tilt, tilt);

    Orbit {
        distance: distance.max(f64::EPSILON),
        angle_deg,
        inclination_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn flat_orbit_lies_in_xy_plane() {
        let orbit = Orbit { distance: 2.0, angle_deg: 90.0, inclination_deg: 0.0 };
        let offset = orbit.offset();
        assert_relative_eq!(offset.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(offset.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(offset.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn inclination_moves_into_z() {
        let orbit = Orbit { distance: 1.0, angle_deg: 90.0, inclination_deg: 90.0 };
        let offset = orbit.offset();
        assert_relative_eq!(offset.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(offset.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn absolute_adds_star_position() {
        let star = DVec3::new(100.0, -50.0, 7.0);
        let orbit = Orbit { distance: 3.0, angle_deg: 0.0, inclination_deg: 4.0 };
        assert_eq!(orbit.absolute(star), DVec3::new(103.0, -50.0, 7.0));
    }

    #[test]
    fn placements_respect_jitter_bounds() {
        let config = GenerationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            for i in 0..3 {
                let orbit = place_orbit(i, 3, &config, &mut rng);
                let base = 1.0 + 9.0 * (i as f64 + 1.0) / 4.0;
                assert!(orbit.distance >= base * 0.8 - 1e-9 && orbit.distance <= base * 1.2 + 1e-9);
                let expected = i as f64 * 120.0;
                assert!((orbit.angle_deg - expected).abs() <= 10.0 + 1e-9);
                assert!(orbit.inclination_deg.abs() <= 5.0);
            }
        }
    }

    proptest! {
        #[test]
        fn offset_length_equals_distance(
            distance in 0.1f64..50.0,
            angle in -720.0f64..720.0,
            tilt in -30.0f64..30.0,
        ) {
            let orbit = Orbit { distance, angle_deg: angle, inclination_deg: tilt };
            prop_assert!((orbit.offset().length() - distance).abs() < 1e-9 * distance.max(1.0));
        }

        #[test]
        fn full_turns_do_not_change_position(
            distance in 0.1f64..50.0,
            angle in 0.0f64..360.0,
            tilt in -10.0f64..10.0,
        ) {
            let a = Orbit { distance, angle_deg: angle, inclination_deg: tilt };
            let b = a.at_angle(angle + 360.0);
            prop_assert!(a.offset().distance(b.offset()) < 1e-9);
        }
    }
}
