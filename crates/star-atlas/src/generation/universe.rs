use crate::api::config::GenerationConfig;
use crate::api::error::StoreError;
use crate::api::types::SystemId;
use crate::core::random::RandomSource;
use crate::store::UniverseStore;

use glam::DVec3;

use super::system::{StarSystemGenerator, SystemOptions};

/// Seeds a whole universe: one system placed by rejection sampling, the rest
/// grown next to randomly chosen existing systems.
pub struct UniverseGenerator<'a> {
    config: &'a GenerationConfig,
}

impl<'a> UniverseGenerator<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Create `count` systems and return their ids in creation order.
    pub fn generate_universe(
        &self,
        store: &mut dyn UniverseStore,
        rng: &mut dyn RandomSource,
        count: usize,
        min_distance: f64,
    ) -> Result<Vec<SystemId>, StoreError> {
        let systems = StarSystemGenerator::new(self.config);
        let mut created: Vec<(SystemId, DVec3)> = Vec::with_capacity(count);

        if count == 0 {
            return Ok(Vec::new());
        }

        let first = systems.generate_system(
            store,
            rng,
            SystemOptions::away_from_origin(min_distance),
        )?;
        created.push((first.id, first.position));

        while created.len() < count {
            let index = rng.next_int(0, created.len() as u32 - 1) as usize;
            let origin = created[index.min(created.len() - 1)].1;
            let next = systems.generate_nearby_system(
                store,
                rng,
                origin,
                self.config.nearby_min_distance,
                self.config.nearby_max_distance,
            )?;
            created.push((next.id, next.position));
        }

        log::info!("generated universe of {} systems", created.len());
        Ok(created.into_iter().map(|(id, _)| id).collect())
    }
}

/// Mark every system within `radius` of `point` as discovered.
///
/// Returns only the systems that changed from undiscovered to discovered.
pub fn discover_within_radius(
    store: &mut dyn UniverseStore,
    point: DVec3,
    radius: f64,
) -> Result<Vec<SystemId>, StoreError> {
    let fresh: Vec<SystemId> = store
        .systems_within_radius(point, radius)
        .into_iter()
        .filter(|s| !s.discovered)
        .map(|s| s.id)
        .collect();
    for &id in &fresh {
        store.set_discovered(id, true)?;
    }
    if !fresh.is_empty() {
        log::info!("discovered {} systems", fresh.len());
    }
    Ok(fresh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::star_system::{StarSystem, StarType};
    use crate::store::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn universe_has_requested_size() {
        let config = GenerationConfig::default();
        let mut store = MemoryStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let ids = UniverseGenerator::new(&config)
            .generate_universe(&mut store, &mut rng, 12, 100.0)
            .unwrap();
        assert_eq!(ids.len(), 12);
        assert_eq!(store.system_total(), 12);
    }

    #[test]
    fn empty_universe_is_fine() {
        let config = GenerationConfig::default();
        let mut store = MemoryStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let ids = UniverseGenerator::new(&config)
            .generate_universe(&mut store, &mut rng, 0, 100.0)
            .unwrap();
        assert!(ids.is_empty());
        assert_eq!(store.system_total(), 0);
    }

    #[test]
    fn grown_systems_sit_near_an_existing_one() {
        let config = GenerationConfig::default();
        let mut store = MemoryStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        UniverseGenerator::new(&config)
            .generate_universe(&mut store, &mut rng, 8, 0.0)
            .unwrap();
        let systems = store.systems();
        for (i, system) in systems.iter().enumerate().skip(1) {
            let nearest = systems[..i]
                .iter()
                .map(|other| other.position.distance(system.position))
                .fold(f64::INFINITY, f64::min);
            assert!(nearest <= config.nearby_max_distance + 1e-6);
        }
    }

    #[test]
    fn discovery_reports_only_new_systems() {
        let mut store = MemoryStore::new();
        let near = store
            .create_system(StarSystem::new("Near", DVec3::new(1.0, 0.0, 0.0), StarType::RedDwarf))
            .unwrap();
        store
            .create_system(StarSystem::new("Far", DVec3::new(500.0, 0.0, 0.0), StarType::RedDwarf))
            .unwrap();

        let first = discover_within_radius(&mut store, DVec3::ZERO, 10.0).unwrap();
        assert_eq!(first, vec![near]);
        assert!(store.system(near).unwrap().discovered);

        let again = discover_within_radius(&mut store, DVec3::ZERO, 10.0).unwrap();
        assert!(again.is_empty());
    }
}
