use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::api::types::SystemId;

/// Spectral category of a system's star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StarType {
    #[default]
    RedDwarf,
    YellowDwarf,
    WhiteDwarf,
    RedGiant,
    BlueGiant,
    NeutronStar,
}

impl StarType {
    pub const ALL: [StarType; 6] = [
        StarType::RedDwarf,
        StarType::YellowDwarf,
        StarType::WhiteDwarf,
        StarType::RedGiant,
        StarType::BlueGiant,
        StarType::NeutronStar,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StarType::RedDwarf => "Red Dwarf",
            StarType::YellowDwarf => "Yellow Dwarf",
            StarType::WhiteDwarf => "White Dwarf",
            StarType::RedGiant => "Red Giant",
            StarType::BlueGiant => "Blue Giant",
            StarType::NeutronStar => "Neutron Star",
        }
    }
}

/// A generated star system.
///
/// `planet_count` equals the number of planets linked to this system once
/// generation has finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSystem {
    pub id: SystemId,
    pub name: String,
    pub position: DVec3,
    pub star_type: StarType,
    pub planet_count: u32,
    pub discovered: bool,
}

impl StarSystem {
    /// A fresh, undiscovered system with no planets yet.
    /// The id is a placeholder until the store assigns one.
    pub fn new(name: impl Into<String>, position: DVec3, star_type: StarType) -> Self {
        Self {
            id: SystemId(0),
            name: name.into(),
            position,
            star_type,
            planet_count: 0,
            discovered: false,
        }
    }
}
