use serde::{Deserialize, Serialize};

/// Unique identifier for a star system in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SystemId(pub u32);

/// Unique identifier for a planet in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlanetId(pub u32);

/// Anything the map can select or draw: a system or a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityRef {
    System(SystemId),
    Planet(PlanetId),
}

impl EntityRef {
    /// Numeric id for the JS side. Systems are positive, planets negative.
    pub fn wire_id(self) -> f32 {
        match self {
            EntityRef::System(SystemId(id)) => id as f32,
            EntityRef::Planet(PlanetId(id)) => -(id as f32),
        }
    }
}

impl From<SystemId> for EntityRef {
    fn from(id: SystemId) -> Self {
        EntityRef::System(id)
    }
}

impl From<PlanetId> for EntityRef {
    fn from(id: PlanetId) -> Self {
        EntityRef::Planet(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_id_distinguishes_kinds() {
        assert_eq!(EntityRef::System(SystemId(3)).wire_id(), 3.0);
        assert_eq!(EntityRef::Planet(PlanetId(3)).wire_id(), -3.0);
    }
}
