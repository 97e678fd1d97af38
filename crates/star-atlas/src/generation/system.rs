//! Star system generation: placement, star type, planets and their orbits.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use crate::api::config::GenerationConfig;
use crate::api::error::StoreError;
use crate::components::star_system::{StarSystem, StarType};
use crate::core::random::RandomSource;
use crate::store::UniverseStore;

use super::orbit::place_orbit;
use super::planet::{pick_str, PlanetGenerator};
use super::tables::{
    PLANET_COUNT_WEIGHTS, STAR_TYPE_WEIGHTS, SYSTEM_NAME_CATALOGS, SYSTEM_NAME_PREFIXES,
};
use super::weighted::WeightedTable;

/// Overrides for a single `generate_system` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOptions {
    /// Fixed position; drawn by rejection sampling when `None`.
    pub position: Option<DVec3>,
    /// Sampled positions are at least this far from the origin.
    pub min_distance: f64,
    pub star_type: Option<StarType>,
    pub planet_count: Option<u32>,
}

impl SystemOptions {
    pub fn at(position: DVec3) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn away_from_origin(min_distance: f64) -> Self {
        Self {
            min_distance,
            ..Self::default()
        }
    }

    pub fn with_planet_count(mut self, count: u32) -> Self {
        self.planet_count = Some(count);
        self
    }

    pub fn with_star_type(mut self, star_type: StarType) -> Self {
        self.star_type = Some(star_type);
        self
    }
}

pub fn roll_star_type(rng: &mut dyn RandomSource) -> StarType {
    WeightedTable::new(STAR_TYPE_WEIGHTS).choose(rng)
}

pub fn roll_planet_count(rng: &mut dyn RandomSource) -> u32 {
    WeightedTable::new(PLANET_COUNT_WEIGHTS)
        .select_unit(rng.next_f64())
        .copied()
        .unwrap_or(1)
}

/// "<Greek letter> <catalog> <number>", e.g. "Tau Ceti 482".
pub fn system_name(rng: &mut dyn RandomSource) -> String {
    let prefix = pick_str(SYSTEM_NAME_PREFIXES, rng);
    let catalog = pick_str(SYSTEM_NAME_CATALOGS, rng);
    let number = rng.next_int(1, 999);
    format!("{prefix} {catalog} {number}")
}

/// Uniform point in the universe cube farther than `min_distance` from the
/// origin.
///
/// If the cube cannot satisfy the constraint within the attempt budget, the
/// last draw is pushed outward along its own direction instead.
pub fn sample_position(
    config: &GenerationConfig,
    min_distance: f64,
    rng: &mut dyn RandomSource,
) -> DVec3 {
    let h = config.universe_half_extent;
    let mut point = DVec3::ZERO;
    for _ in 0..config.max_placement_attempts.max(1) {
        point = DVec3::new(
            rng.next_range(-h, h),
            rng.next_range(-h, h),
            rng.next_range(-h, h),
        );
        if min_distance <= 0.0 || point.length() > min_distance {
            return point;
        }
    }
    let direction = point.try_normalize().unwrap_or(DVec3::X);
    log::warn!("placement attempts exhausted, pushing system out to {min_distance}");
    direction * min_distance * (1.0 + 1e-9) + direction * f64::EPSILON
}

/// Random offset of length in [min, max] along a direction given by two
/// independent angles.
pub fn random_offset(min: f64, max: f64, rng: &mut dyn RandomSource) -> DVec3 {
    let theta = rng.next_range(0.0, TAU);
    let phi = rng.next_range(0.0, PI);
    let distance = rng.next_range(min, max);
    DVec3::new(
        distance * phi.sin() * theta.cos(),
        distance * phi.sin() * theta.sin(),
        distance * phi.cos(),
    )
}

pub struct StarSystemGenerator<'a> {
    config: &'a GenerationConfig,
}

impl<'a> StarSystemGenerator<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Create a system and all of its planets.
    ///
    /// Planets are created unbound, then attached with their orbit and the
    /// absolute position derived from it. The planet count is written last
    /// and always equals the number of attached planets.
    pub fn generate_system(
        &self,
        store: &mut dyn UniverseStore,
        rng: &mut dyn RandomSource,
        options: SystemOptions,
    ) -> Result<StarSystem, StoreError> {
        let position = match options.position {
            Some(p) => p,
            None => sample_position(self.config, options.min_distance, rng),
        };
        let star_type = options.star_type.unwrap_or_else(|| roll_star_type(rng));
        let planned = options.planet_count.unwrap_or_else(|| roll_planet_count(rng));
        let name = system_name(rng);

        let system_id = store.create_system(StarSystem::new(name, position, star_type))?;

        let planets = PlanetGenerator::new(self.config);
        let count = planned as usize;
        let mut attached = 0u32;
        for index in 0..count {
            let planet_id = planets.generate(store, rng)?;
            let orbit = place_orbit(index, count, self.config, rng);
            store.attach_planet(planet_id, system_id, orbit, orbit.absolute(position))?;
            attached += 1;
        }
        store.set_planet_count(system_id, attached)?;

        let system = store
            .system(system_id)
            .cloned()
            .ok_or(StoreError::UnknownSystem(system_id))?;
        log::debug!(
            "generated {} ({:?}) with {} planets at {:?}",
            system.name,
            system.star_type,
            attached,
            system.position
        );
        Ok(system)
    }

    /// Create a system between `min_distance` and `max_distance` away from
    /// `origin`, in a random direction.
    pub fn generate_nearby_system(
        &self,
        store: &mut dyn UniverseStore,
        rng: &mut dyn RandomSource,
        origin: DVec3,
        min_distance: f64,
        max_distance: f64,
    ) -> Result<StarSystem, StoreError> {
        let position = origin + random_offset(min_distance, max_distance, rng);
        self.generate_system(store, rng, SystemOptions::at(position))
    }
}
