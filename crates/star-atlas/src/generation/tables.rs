//! Fixed generation tables: weights, render attributes, name parts, phrases.

use crate::components::planet::{
    Atmosphere, PlanetSize, PlanetType, Resources, Temperature, Terrain,
};
use crate::components::star_system::StarType;

// ── Star systems ─────────────────────────────────────────────────────

pub const STAR_TYPE_WEIGHTS: &[(StarType, u32)] = &[
    (StarType::RedDwarf, 35),
    (StarType::YellowDwarf, 25),
    (StarType::WhiteDwarf, 15),
    (StarType::RedGiant, 12),
    (StarType::BlueGiant, 8),
    (StarType::NeutronStar, 5),
];

/// Planets per system.
pub const PLANET_COUNT_WEIGHTS: &[(u32, u32)] = &[
    (1, 10),
    (2, 15),
    (3, 20),
    (4, 20),
    (5, 15),
    (6, 10),
    (7, 7),
    (8, 3),
];

/// How a star is drawn on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarVisual {
    /// Linear RGB, 0..1.
    pub color: [f32; 3],
    /// Radius in screen pixels at zoom 1.
    pub radius: f32,
}

pub fn star_visual(star_type: StarType) -> StarVisual {
    match star_type {
        StarType::RedDwarf => StarVisual { color: [1.0, 0.42, 0.3], radius: 3.0 },
        StarType::YellowDwarf => StarVisual { color: [1.0, 0.92, 0.55], radius: 4.0 },
        StarType::WhiteDwarf => StarVisual { color: [0.92, 0.94, 1.0], radius: 2.5 },
        StarType::RedGiant => StarVisual { color: [1.0, 0.3, 0.15], radius: 7.0 },
        StarType::BlueGiant => StarVisual { color: [0.55, 0.7, 1.0], radius: 8.0 },
        StarType::NeutronStar => StarVisual { color: [0.7, 0.95, 1.0], radius: 2.0 },
    }
}

// ── Planets ──────────────────────────────────────────────────────────

pub const PLANET_TYPE_WEIGHTS: &[(PlanetType, u32)] = &[
    (PlanetType::Terrestrial, 30),
    (PlanetType::GasGiant, 25),
    (PlanetType::IceGiant, 15),
    (PlanetType::Desert, 15),
    (PlanetType::Ocean, 15),
];

/// Characteristic weight sub-tables for one planet type.
#[derive(Debug, Clone, Copy)]
pub struct CharacteristicTables {
    pub size: &'static [(PlanetSize, u32)],
    pub temperature: &'static [(Temperature, u32)],
    pub atmosphere: &'static [(Atmosphere, u32)],
    pub terrain: &'static [(Terrain, u32)],
    pub resources: &'static [(Resources, u32)],
}

const TERRESTRIAL: CharacteristicTables = CharacteristicTables {
    size: &[
        (PlanetSize::Tiny, 10),
        (PlanetSize::Small, 30),
        (PlanetSize::Medium, 40),
        (PlanetSize::Large, 20),
    ],
    temperature: &[
        (Temperature::Frozen, 10),
        (Temperature::Cold, 20),
        (Temperature::Temperate, 40),
        (Temperature::Hot, 20),
        (Temperature::Scorching, 10),
    ],
    atmosphere: &[
        (Atmosphere::Airless, 15),
        (Atmosphere::Thin, 30),
        (Atmosphere::Breathable, 30),
        (Atmosphere::Dense, 15),
        (Atmosphere::Toxic, 10),
    ],
    terrain: &[
        (Terrain::Rocky, 35),
        (Terrain::Mountainous, 30),
        (Terrain::Volcanic, 15),
        (Terrain::Barren, 20),
    ],
    resources: &[
        (Resources::Scarce, 15),
        (Resources::Common, 40),
        (Resources::Abundant, 25),
        (Resources::Rare, 15),
        (Resources::Exotic, 5),
    ],
};

const GAS_GIANT: CharacteristicTables = CharacteristicTables {
    size: &[(PlanetSize::Large, 40), (PlanetSize::Massive, 60)],
    temperature: &[
        (Temperature::Frozen, 25),
        (Temperature::Cold, 40),
        (Temperature::Temperate, 15),
        (Temperature::Hot, 15),
        (Temperature::Scorching, 5),
    ],
    atmosphere: &[(Atmosphere::Dense, 70), (Atmosphere::Toxic, 30)],
    terrain: &[(Terrain::Gaseous, 100)],
    resources: &[
        (Resources::Common, 40),
        (Resources::Abundant, 35),
        (Resources::Rare, 20),
        (Resources::Exotic, 5),
    ],
};

const ICE_GIANT: CharacteristicTables = CharacteristicTables {
    size: &[
        (PlanetSize::Medium, 20),
        (PlanetSize::Large, 55),
        (PlanetSize::Massive, 25),
    ],
    temperature: &[(Temperature::Frozen, 70), (Temperature::Cold, 30)],
    atmosphere: &[
        (Atmosphere::Thin, 20),
        (Atmosphere::Dense, 60),
        (Atmosphere::Toxic, 20),
    ],
    terrain: &[(Terrain::Icy, 60), (Terrain::Gaseous, 40)],
    resources: &[
        (Resources::Scarce, 20),
        (Resources::Common, 40),
        (Resources::Rare, 30),
        (Resources::Exotic, 10),
    ],
};

const DESERT: CharacteristicTables = CharacteristicTables {
    size: &[
        (PlanetSize::Tiny, 15),
        (PlanetSize::Small, 35),
        (PlanetSize::Medium, 35),
        (PlanetSize::Large, 15),
    ],
    temperature: &[
        (Temperature::Temperate, 15),
        (Temperature::Hot, 50),
        (Temperature::Scorching, 35),
    ],
    atmosphere: &[
        (Atmosphere::Airless, 25),
        (Atmosphere::Thin, 50),
        (Atmosphere::Breathable, 10),
        (Atmosphere::Toxic, 15),
    ],
    terrain: &[
        (Terrain::Dunes, 50),
        (Terrain::Rocky, 25),
        (Terrain::Barren, 15),
        (Terrain::Mountainous, 10),
    ],
    resources: &[
        (Resources::Scarce, 35),
        (Resources::Common, 35),
        (Resources::Abundant, 10),
        (Resources::Rare, 15),
        (Resources::Exotic, 5),
    ],
};

const OCEAN: CharacteristicTables = CharacteristicTables {
    size: &[
        (PlanetSize::Small, 20),
        (PlanetSize::Medium, 50),
        (PlanetSize::Large, 30),
    ],
    temperature: &[
        (Temperature::Cold, 25),
        (Temperature::Temperate, 55),
        (Temperature::Hot, 20),
    ],
    atmosphere: &[
        (Atmosphere::Thin, 15),
        (Atmosphere::Breathable, 55),
        (Atmosphere::Dense, 30),
    ],
    terrain: &[(Terrain::Oceanic, 80), (Terrain::Icy, 10), (Terrain::Volcanic, 10)],
    resources: &[
        (Resources::Common, 45),
        (Resources::Abundant, 35),
        (Resources::Rare, 15),
        (Resources::Exotic, 5),
    ],
};

pub fn characteristic_tables(planet_type: PlanetType) -> &'static CharacteristicTables {
    match planet_type {
        PlanetType::Terrestrial => &TERRESTRIAL,
        PlanetType::GasGiant => &GAS_GIANT,
        PlanetType::IceGiant => &ICE_GIANT,
        PlanetType::Desert => &DESERT,
        PlanetType::Ocean => &OCEAN,
    }
}

// ── Names ────────────────────────────────────────────────────────────

pub const PLANET_NAME_PREFIXES: &[&str] = &[
    "Kepler", "Gliese", "Xeno", "Nova", "Terra", "Hadar", "Vega", "Orion", "Lyra", "Zeta",
    "Thule", "Corvus", "Helix", "Rigel", "Talos", "Nyx",
];

pub const PLANET_NAME_SUFFIXES: &[&str] = &[
    "Prime", "Minor", "Major", "Secundus", "Tertius", "b", "c", "d", "Reach", "Haven",
    "Drift", "Deep",
];

pub const SYSTEM_NAME_PREFIXES: &[&str] = &[
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
    "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi",
    "Chi", "Psi", "Omega",
];

pub const SYSTEM_NAME_CATALOGS: &[&str] = &[
    "Centauri", "Cygni", "Draconis", "Eridani", "Leonis", "Orionis", "Pegasi", "Scorpii",
    "Tauri", "Ursae", "Aquilae", "Lyrae", "Carinae", "Velorum",
];

// ── Description phrases ──────────────────────────────────────────────

impl PlanetType {
    pub fn phrase(self) -> &'static str {
        match self {
            PlanetType::Terrestrial => "A rocky terrestrial world",
            PlanetType::GasGiant => "A swirling gas giant",
            PlanetType::IceGiant => "A frigid ice giant",
            PlanetType::Desert => "A sun-baked desert world",
            PlanetType::Ocean => "A world of endless oceans",
        }
    }
}

impl PlanetSize {
    pub fn phrase(self) -> &'static str {
        match self {
            PlanetSize::Tiny => "barely larger than a moon",
            PlanetSize::Small => "of modest size",
            PlanetSize::Medium => "of roughly Earth-like size",
            PlanetSize::Large => "of considerable size",
            PlanetSize::Massive => "of immense proportions",
        }
    }
}

impl Temperature {
    pub fn phrase(self) -> &'static str {
        match self {
            Temperature::Frozen => "locked in perpetual frost",
            Temperature::Cold => "with a cold climate",
            Temperature::Temperate => "with a temperate climate",
            Temperature::Hot => "with sweltering heat",
            Temperature::Scorching => "scorched by relentless heat",
        }
    }
}

impl Atmosphere {
    pub fn phrase(self) -> &'static str {
        match self {
            Atmosphere::Airless => "It has no atmosphere to speak of",
            Atmosphere::Thin => "Its thin atmosphere offers little protection",
            Atmosphere::Breathable => "Its atmosphere is breathable",
            Atmosphere::Dense => "A dense atmosphere blankets it",
            Atmosphere::Toxic => "Its atmosphere is thick with toxic gases",
        }
    }
}

impl Terrain {
    pub fn phrase(self) -> &'static str {
        match self {
            Terrain::Barren => "over barren plains",
            Terrain::Rocky => "over rugged rocky ground",
            Terrain::Mountainous => "over towering mountain ranges",
            Terrain::Volcanic => "over active volcanic fields",
            Terrain::Oceanic => "over deep planet-wide seas",
            Terrain::Icy => "over sheets of ancient ice",
            Terrain::Dunes => "over endless shifting dunes",
            Terrain::Gaseous => "over bands of churning cloud",
        }
    }
}

impl Resources {
    pub fn phrase(self) -> &'static str {
        match self {
            Resources::Scarce => "Resources here are scarce.",
            Resources::Common => "Common resources can be found.",
            Resources::Abundant => "Resources are abundant.",
            Resources::Rare => "Surveys hint at rare materials.",
            Resources::Exotic => "Exotic materials of unknown origin have been detected.",
        }
    }
}
