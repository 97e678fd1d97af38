//! Planet generation: type, characteristics, unique name, description.

use glam::DVec3;

use crate::api::config::GenerationConfig;
use crate::api::error::StoreError;
use crate::api::types::PlanetId;
use crate::components::planet::{Characteristics, Planet, PlanetType};
use crate::core::random::RandomSource;
use crate::store::UniverseStore;

use super::tables::{
    characteristic_tables, PLANET_NAME_PREFIXES, PLANET_NAME_SUFFIXES, PLANET_TYPE_WEIGHTS,
};
use super::weighted::WeightedTable;

/// Draw a planet type from the fixed type table.
pub fn roll_planet_type(rng: &mut dyn RandomSource) -> PlanetType {
    WeightedTable::new(PLANET_TYPE_WEIGHTS).choose(rng)
}

/// Draw each characteristic independently from the type's sub-tables.
pub fn roll_characteristics(planet_type: PlanetType, rng: &mut dyn RandomSource) -> Characteristics {
    let tables = characteristic_tables(planet_type);
    Characteristics {
        size: WeightedTable::new(tables.size).choose(rng),
        temperature: WeightedTable::new(tables.temperature).choose(rng),
        atmosphere: WeightedTable::new(tables.atmosphere).choose(rng),
        terrain: WeightedTable::new(tables.terrain).choose(rng),
        resources: WeightedTable::new(tables.resources).choose(rng),
    }
}

/// Compose a description from fixed phrases: type, size, temperature,
/// atmosphere, terrain, resources.
pub fn describe(planet_type: PlanetType, traits: &Characteristics) -> String {
    format!(
        "{} {}, {}. {} {}. {}",
        planet_type.phrase(),
        traits.size.phrase(),
        traits.temperature.phrase(),
        traits.atmosphere.phrase(),
        traits.terrain.phrase(),
        traits.resources.phrase(),
    )
}

fn candidate_name(rng: &mut dyn RandomSource) -> String {
    let prefix = pick_str(PLANET_NAME_PREFIXES, rng);
    let number = rng.next_int(100, 999);
    let suffix = pick_str(PLANET_NAME_SUFFIXES, rng);
    format!("{prefix}-{number} {suffix}")
}

pub(crate) fn pick_str(items: &[&'static str], rng: &mut dyn RandomSource) -> &'static str {
    if items.is_empty() {
        return "";
    }
    let idx = rng.next_int(0, items.len() as u32 - 1) as usize;
    items[idx.min(items.len() - 1)]
}

/// A planet name not present in the store.
///
/// Tries up to `retry_limit` random names. If the last attempt still
/// collides, a numeric suffix is appended and bumped until the name is free.
pub fn unique_name(
    store: &dyn UniverseStore,
    retry_limit: u32,
    rng: &mut dyn RandomSource,
) -> String {
    let attempts = retry_limit.max(1);
    let mut name = candidate_name(rng);
    for attempt in 1..attempts {
        if !store.planet_name_exists(&name) {
            return name;
        }
        log::debug!("planet name {name} taken (attempt {attempt})");
        name = candidate_name(rng);
    }
    if !store.planet_name_exists(&name) {
        return name;
    }

    let mut serial = store.planet_total() + 1;
    loop {
        let forced = format!("{name} #{serial}");
        if !store.planet_name_exists(&forced) {
            log::warn!("planet name retries exhausted, using {forced}");
            return forced;
        }
        serial += 1;
    }
}

/// Generates free-floating planets and persists them.
pub struct PlanetGenerator<'a> {
    config: &'a GenerationConfig,
}

impl<'a> PlanetGenerator<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Create an unbound planet at the origin. The system generator binds it
    /// to a star and corrects its position afterwards.
    pub fn generate(
        &self,
        store: &mut dyn UniverseStore,
        rng: &mut dyn RandomSource,
    ) -> Result<PlanetId, StoreError> {
        let planet_type = roll_planet_type(rng);
        let traits = roll_characteristics(planet_type, rng);
        let name = unique_name(&*store, self.config.name_retry_limit, rng);
        let description = describe(planet_type, &traits);
        log::debug!("generated {planet_type:?} planet {name}");

        store.create_planet(Planet {
            id: PlanetId(0),
            system: None,
            name,
            description,
            planet_type,
            traits,
            position: DVec3::ZERO,
            orbit: None,
        })
    }
}
