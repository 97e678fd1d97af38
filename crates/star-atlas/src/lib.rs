pub mod api;
pub mod bridge;
pub mod components;
pub mod core;
pub mod extensions;
pub mod generation;
pub mod input;
pub mod renderer;
pub mod spatial;
pub mod store;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{AnimationConfig, AtlasConfig, GenerationConfig, InteractionConfig, ViewConfig};
pub use api::error::{ConfigError, StoreError};
pub use api::session::AtlasSession;
pub use api::types::{EntityRef, PlanetId, SystemId};
pub use bridge::protocol::FrameHeader;
pub use components::planet::{Characteristics, Orbit, Planet, PlanetType};
pub use components::star_system::{StarSystem, StarType};
pub use crate::core::random::RandomSource;
pub use crate::core::time::{Clock, FrameClock, ManualClock};
pub use generation::{
    discover_within_radius, PlanetGenerator, StarSystemGenerator, SystemOptions, UniverseGenerator,
    WeightedTable,
};
pub use input::{InputEvent, InputQueue, InteractionController, InteractionState, MapTarget, ViewCommand};
pub use renderer::{
    BodyInstance, LineClipper, LineInstance, ProjectionPlane, RenderBuffer, ViewTransform,
};
pub use store::{MemoryStore, UniverseStore};
pub use systems::orbit::OrbitalAnimator;
pub use systems::render::build_frame;

// Extensions: view animation helpers
pub use extensions::{ease, ease_dvec2, lerp, lerp_dvec2, Easing, ViewPose, ViewTween};
