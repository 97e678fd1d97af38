use std::collections::{BTreeMap, HashSet};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::UniverseStore;
use crate::api::error::StoreError;
use crate::api::types::{PlanetId, SystemId};
use crate::components::planet::{Orbit, Planet};
use crate::components::star_system::StarSystem;

/// In-memory store. Ids are assigned monotonically from 1.
#[derive(Debug, Default)]
pub struct MemoryStore {
    systems: BTreeMap<SystemId, StarSystem>,
    planets: BTreeMap<PlanetId, Planet>,
    planet_names: HashSet<String>,
    next_system: u32,
    next_planet: u32,
}

#[derive(Serialize, Deserialize)]
struct Snapshot {
    systems: Vec<StarSystem>,
    planets: Vec<Planet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize every system and planet to JSON.
    pub fn to_json(&self) -> Result<String, StoreError> {
        let snapshot = Snapshot {
            systems: self.systems.values().cloned().collect(),
            planets: self.planets.values().cloned().collect(),
        };
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// Rebuild a store from a JSON snapshot, keeping the stored ids.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        let mut store = Self::new();
        for system in snapshot.systems {
            store.next_system = store.next_system.max(system.id.0);
            store.systems.insert(system.id, system);
        }
        for planet in snapshot.planets {
            if let Some(owner) = planet.system {
                if !store.systems.contains_key(&owner) {
                    return Err(StoreError::UnknownSystem(owner));
                }
            }
            store.next_planet = store.next_planet.max(planet.id.0);
            store.planet_names.insert(planet.name.clone());
            store.planets.insert(planet.id, planet);
        }
        Ok(store)
    }

    pub fn system_total(&self) -> usize {
        self.systems.len()
    }
}

impl UniverseStore for MemoryStore {
    fn create_system(&mut self, mut system: StarSystem) -> Result<SystemId, StoreError> {
        self.next_system += 1;
        let id = SystemId(self.next_system);
        system.id = id;
        self.systems.insert(id, system);
        Ok(id)
    }

    fn create_planet(&mut self, mut planet: Planet) -> Result<PlanetId, StoreError> {
        self.next_planet += 1;
        let id = PlanetId(self.next_planet);
        planet.id = id;
        self.planet_names.insert(planet.name.clone());
        self.planets.insert(id, planet);
        Ok(id)
    }

    fn attach_planet(
        &mut self,
        planet: PlanetId,
        system: SystemId,
        orbit: Orbit,
        position: DVec3,
    ) -> Result<(), StoreError> {
        if !self.systems.contains_key(&system) {
            return Err(StoreError::UnknownSystem(system));
        }
        let entry = self
            .planets
            .get_mut(&planet)
            .ok_or(StoreError::UnknownPlanet(planet))?;
        entry.system = Some(system);
        entry.orbit = Some(orbit);
        entry.position = position;
        Ok(())
    }

    fn set_planet_count(&mut self, system: SystemId, count: u32) -> Result<(), StoreError> {
        let entry = self
            .systems
            .get_mut(&system)
            .ok_or(StoreError::UnknownSystem(system))?;
        entry.planet_count = count;
        Ok(())
    }

    fn set_discovered(&mut self, system: SystemId, discovered: bool) -> Result<(), StoreError> {
        let entry = self
            .systems
            .get_mut(&system)
            .ok_or(StoreError::UnknownSystem(system))?;
        entry.discovered = discovered;
        Ok(())
    }

    fn planet_name_exists(&self, name: &str) -> bool {
        self.planet_names.contains(name)
    }

    fn system(&self, id: SystemId) -> Option<&StarSystem> {
        self.systems.get(&id)
    }

    fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.get(&id)
    }

    fn systems(&self) -> Vec<&StarSystem> {
        self.systems.values().collect()
    }

    fn planets(&self) -> Vec<&Planet> {
        self.planets.values().collect()
    }

    fn planets_of(&self, system: SystemId) -> Vec<&Planet> {
        self.planets
            .values()
            .filter(|p| p.system == Some(system))
            .collect()
    }

    fn planet_total(&self) -> usize {
        self.planets.len()
    }
}
