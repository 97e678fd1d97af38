use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;

/// Tunable constants for generation and the map view.
/// Every section has defaults; a JSON override may set any subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub generation: GenerationConfig,
    pub view: ViewConfig,
    pub interaction: InteractionConfig,
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Systems without explicit coordinates are drawn from [-h, h]³.
    pub universe_half_extent: f64,
    /// Inner edge of the orbital band.
    pub orbit_min_distance: f64,
    /// Outer edge of the orbital band.
    pub orbit_max_distance: f64,
    /// Fractional ± jitter applied to each orbital distance.
    pub orbit_distance_jitter: f64,
    /// ± jitter in degrees applied to evenly spaced orbital angles.
    pub orbit_angle_jitter_deg: f64,
    /// Orbital inclination is drawn from ± this many degrees.
    pub max_inclination_deg: f64,
    /// Name attempts before falling back to a forced-unique name.
    pub name_retry_limit: u32,
    /// Rejection-sampling attempts before pushing the last draw outward.
    pub max_placement_attempts: u32,
    /// Distance band for systems grown next to an existing one.
    pub nearby_min_distance: f64,
    pub nearby_max_distance: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            universe_half_extent: 1000.0,
            orbit_min_distance: 1.0,
            orbit_max_distance: 10.0,
            orbit_distance_jitter: 0.2,
            orbit_angle_jitter_deg: 10.0,
            max_inclination_deg: 5.0,
            name_retry_limit: 10,
            max_placement_attempts: 1000,
            nearby_min_distance: 50.0,
            nearby_max_distance: 150.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Zoom used when there is nothing to fit.
    pub default_zoom: f64,
    /// Fraction of the bounding box added on each side when fitting.
    pub fit_padding: f64,
    /// Decimal places kept in screen-cache keys.
    pub cache_precision: u32,
    /// Off-screen margin in pixels before a body is culled.
    pub cull_margin: f64,
    /// Neighbours each system is linked to in the lane graph.
    pub connection_neighbors: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.05,
            max_zoom: 40.0,
            default_zoom: 1.0,
            fit_padding: 0.1,
            cache_precision: 3,
            cull_margin: 24.0,
            connection_neighbors: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Pointer travel in pixels before a press becomes a drag.
    pub drag_threshold_px: f64,
    /// Max screen distance for click selection.
    pub click_radius_px: f64,
    /// Two clicks on the same entity within this window are a double click.
    pub double_click_ms: f64,
    /// Multiplicative zoom per wheel notch.
    pub wheel_zoom_factor: f64,
    /// Neighbours included when framing a focused entity.
    pub focus_neighbor_count: usize,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 5.0,
            click_radius_px: 12.0,
            double_click_ms: 300.0,
            wheel_zoom_factor: 1.1,
            focus_neighbor_count: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration of an animated zoom-to-target.
    pub zoom_duration_ms: f64,
    /// Orbital speed constant k: degrees per second at distance 1.
    pub orbit_speed: f64,
    pub orbits_enabled: bool,
    /// Largest frame delta fed to the frame clock.
    pub max_frame_step_ms: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            zoom_duration_ms: 600.0,
            orbit_speed: 20.0,
            orbits_enabled: true,
            max_frame_step_ms: 100.0,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

impl AtlasConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AtlasConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.generation;
        if !(g.universe_half_extent > 0.0) {
            return Err(invalid("generation.universe_half_extent", "must be positive"));
        }
        if !(g.orbit_min_distance > 0.0) {
            return Err(invalid("generation.orbit_min_distance", "must be positive"));
        }
        if g.orbit_max_distance < g.orbit_min_distance {
            return Err(invalid(
                "generation.orbit_max_distance",
                "must not be below orbit_min_distance",
            ));
        }
        if !(0.0..1.0).contains(&g.orbit_distance_jitter) {
            return Err(invalid("generation.orbit_distance_jitter", "must be in [0, 1)"));
        }
        if g.orbit_angle_jitter_deg < 0.0 || g.max_inclination_deg < 0.0 {
            return Err(invalid("generation.orbit_angle_jitter_deg", "jitter must not be negative"));
        }
        if g.nearby_min_distance < 0.0 || g.nearby_max_distance < g.nearby_min_distance {
            return Err(invalid("generation.nearby_max_distance", "band must be non-negative and ordered"));
        }

        let v = &self.view;
        if !(v.min_zoom > 0.0) {
            return Err(invalid("view.min_zoom", "must be positive"));
        }
        if v.max_zoom < v.min_zoom {
            return Err(invalid("view.max_zoom", "must not be below min_zoom"));
        }
        if !(v.min_zoom..=v.max_zoom).contains(&v.default_zoom) {
            return Err(invalid("view.default_zoom", "must lie within [min_zoom, max_zoom]"));
        }
        if v.fit_padding < 0.0 {
            return Err(invalid("view.fit_padding", "must not be negative"));
        }

        let i = &self.interaction;
        if !(i.wheel_zoom_factor > 1.0) {
            return Err(invalid("interaction.wheel_zoom_factor", "must be greater than 1"));
        }
        if i.drag_threshold_px < 0.0 || i.click_radius_px < 0.0 {
            return Err(invalid("interaction.drag_threshold_px", "pixel distances must not be negative"));
        }

        let a = &self.animation;
        if !(a.zoom_duration_ms > 0.0) {
            return Err(invalid("animation.zoom_duration_ms", "must be positive"));
        }
        if !(a.max_frame_step_ms > 0.0) {
            return Err(invalid("animation.max_frame_step_ms", "must be positive"));
        }
        Ok(())
    }
}
