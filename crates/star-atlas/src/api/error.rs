use crate::api::types::{PlanetId, SystemId};

/// Failures of the persistence collaborator.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("unknown star system {0:?}")]
    UnknownSystem(SystemId),

    #[error("unknown planet {0:?}")]
    UnknownPlanet(PlanetId),

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures loading or validating an `AtlasConfig`.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
