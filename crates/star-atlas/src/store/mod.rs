//! Persistence contract consumed by the generators and the explorer.
//!
//! The core only needs synchronous create/read/update with read-after-write
//! consistency; name uniqueness checks rely on it.

pub mod memory;

use glam::DVec3;

use crate::api::error::StoreError;
use crate::api::types::{PlanetId, SystemId};
use crate::components::planet::{Orbit, Planet};
use crate::components::star_system::StarSystem;

pub use memory::MemoryStore;

pub trait UniverseStore {
    /// Persist a new system. The store assigns and returns its id.
    fn create_system(&mut self, system: StarSystem) -> Result<SystemId, StoreError>;

    /// Persist a new planet. The store assigns and returns its id.
    fn create_planet(&mut self, planet: Planet) -> Result<PlanetId, StoreError>;

    /// Bind a planet to a system with its orbit and absolute position.
    fn attach_planet(
        &mut self,
        planet: PlanetId,
        system: SystemId,
        orbit: Orbit,
        position: DVec3,
    ) -> Result<(), StoreError>;

    fn set_planet_count(&mut self, system: SystemId, count: u32) -> Result<(), StoreError>;

    fn set_discovered(&mut self, system: SystemId, discovered: bool) -> Result<(), StoreError>;

    fn planet_name_exists(&self, name: &str) -> bool;

    fn system(&self, id: SystemId) -> Option<&StarSystem>;

    fn planet(&self, id: PlanetId) -> Option<&Planet>;

    fn systems(&self) -> Vec<&StarSystem>;

    fn planets(&self) -> Vec<&Planet>;

    fn planets_of(&self, system: SystemId) -> Vec<&Planet>;

    fn planet_total(&self) -> usize;

    /// Systems whose distance to `point` is at most `radius`.
    fn systems_within_radius(&self, point: DVec3, radius: f64) -> Vec<&StarSystem> {
        self.systems()
            .into_iter()
            .filter(|s| s.position.distance(point) <= radius)
            .collect()
    }
}
