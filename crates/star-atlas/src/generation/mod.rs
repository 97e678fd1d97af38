//! Procedural universe generation.
//!
//! Every step draws through `RandomSource`, so a seeded generator reproduces
//! the same universe against an empty store.

pub mod orbit;
pub mod planet;
pub mod system;
pub mod tables;
pub mod universe;
pub mod weighted;

pub use orbit::place_orbit;
pub use planet::PlanetGenerator;
pub use system::{StarSystemGenerator, SystemOptions};
pub use universe::{discover_within_radius, UniverseGenerator};
pub use weighted::WeightedTable;
