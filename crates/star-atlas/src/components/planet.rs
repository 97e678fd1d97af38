use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::api::types::{PlanetId, SystemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlanetType {
    #[default]
    Terrestrial,
    GasGiant,
    IceGiant,
    Desert,
    Ocean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlanetSize {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Massive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Temperature {
    Frozen,
    Cold,
    #[default]
    Temperate,
    Hot,
    Scorching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Atmosphere {
    #[default]
    Airless,
    Thin,
    Breathable,
    Dense,
    Toxic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Terrain {
    #[default]
    Barren,
    Rocky,
    Mountainous,
    Volcanic,
    Oceanic,
    Icy,
    Dunes,
    Gaseous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Resources {
    Scarce,
    #[default]
    Common,
    Abundant,
    Rare,
    Exotic,
}

/// Orbital descriptors of a planet relative to its system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    /// Distance from the star, world units. Always positive.
    pub distance: f64,
    /// Angle around the star in degrees. Not normalized.
    pub angle_deg: f64,
    /// Tilt of the orbital plane in degrees.
    pub inclination_deg: f64,
}

/// Per-type characteristics drawn at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Characteristics {
    pub size: PlanetSize,
    pub temperature: Temperature,
    pub atmosphere: Atmosphere,
    pub terrain: Terrain,
    pub resources: Resources,
}

/// A generated planet.
///
/// Free-floating planets have neither `system` nor `orbit`. Bound planets
/// have both, and `position` is the system position plus the orbit offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub system: Option<SystemId>,
    pub name: String,
    pub description: String,
    pub planet_type: PlanetType,
    pub traits: Characteristics,
    pub position: DVec3,
    pub orbit: Option<Orbit>,
}

impl Planet {
    pub fn is_bound(&self) -> bool {
        self.system.is_some() && self.orbit.is_some()
    }
}
