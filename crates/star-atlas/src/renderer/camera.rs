use std::collections::HashMap;

use glam::DVec2;

use crate::api::config::ViewConfig;

/// Memo of world→screen lookups keyed on quantized
/// (wx, wy, zoom, center x, center y).
///
/// `ViewTransform` clears it whenever zoom, center or surface size change.
#[derive(Debug)]
pub struct ScreenCache {
    scale: f64,
    entries: HashMap<[i64; 5], DVec2>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl ScreenCache {
    pub const DEFAULT_CAPACITY: usize = 8192;

    /// `precision` is the number of decimal places kept in keys.
    pub fn new(precision: u32) -> Self {
        Self {
            scale: 10f64.powi(precision.min(12) as i32),
            entries: HashMap::new(),
            capacity: Self::DEFAULT_CAPACITY,
            hits: 0,
            misses: 0,
        }
    }

    fn quantize(&self, v: f64) -> i64 {
        (v * self.scale).round() as i64
    }

    fn key(&self, world: DVec2, zoom: f64, center: DVec2) -> [i64; 5] {
        [
            self.quantize(world.x),
            self.quantize(world.y),
            self.quantize(zoom),
            self.quantize(center.x),
            self.quantize(center.y),
        ]
    }

    fn get_or_insert_with<F: FnOnce() -> DVec2>(&mut self, key: [i64; 5], compute: F) -> DVec2 {
        if let Some(&hit) = self.entries.get(&key) {
            self.hits += 1;
            return hit;
        }
        self.misses += 1;
        if self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        let value = compute();
        self.entries.insert(key, value);
        value
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Change the key precision. Existing entries are dropped when it changes.
    pub fn set_precision(&mut self, precision: u32) {
        let scale = 10f64.powi(precision.min(12) as i32);
        if scale != self.scale {
            self.scale = scale;
            self.entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

/// Affine world↔screen mapping for the 2D map.
///
/// `sx = (wx - cx) * zoom + width / 2`, same for y.
#[derive(Debug)]
pub struct ViewTransform {
    zoom: f64,
    center: DVec2,
    width: f64,
    height: f64,
    min_zoom: f64,
    max_zoom: f64,
    default_zoom: f64,
    fit_padding: f64,
    cache: ScreenCache,
}

impl ViewTransform {
    pub fn new(width: f64, height: f64, config: &ViewConfig) -> Self {
        let (min_zoom, max_zoom, default_zoom) = zoom_limits(config);
        Self {
            zoom: default_zoom,
            center: DVec2::ZERO,
            width: width.max(0.0),
            height: height.max(0.0),
            min_zoom,
            max_zoom,
            default_zoom,
            fit_padding: config.fit_padding.max(0.0),
            cache: ScreenCache::new(config.cache_precision),
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Current lower zoom bound. May sit below the configured minimum after
    /// fitting a universe larger than the configured range allows.
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    pub fn cache(&self) -> &ScreenCache {
        &self.cache
    }

    fn is_degenerate(&self) -> bool {
        !(self.zoom > 0.0) || !self.zoom.is_finite() || self.width <= 0.0 || self.height <= 0.0
    }

    /// Bounds are ordered at construction, so this never sees min > max.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        let zoom = self.clamp_zoom(zoom);
        if zoom != self.zoom {
            self.zoom = zoom;
            self.cache.clear();
        }
    }

    pub fn set_center(&mut self, center: DVec2) {
        if center != self.center {
            self.center = center;
            self.cache.clear();
        }
    }

    /// Set zoom and center together, as an animation frame does.
    pub fn set_view(&mut self, center: DVec2, zoom: f64) {
        self.set_center(center);
        self.set_zoom(zoom);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        let (width, height) = (width.max(0.0), height.max(0.0));
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.cache.clear();
        }
    }

    /// World to screen. Returns the origin when zoom or surface is degenerate.
    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        if self.is_degenerate() {
            return DVec2::ZERO;
        }
        (world - self.center) * self.zoom + self.size() * 0.5
    }

    /// Memoized `world_to_screen`.
    pub fn world_to_screen_cached(&mut self, world: DVec2) -> DVec2 {
        if self.is_degenerate() {
            return DVec2::ZERO;
        }
        let key = self.cache.key(world, self.zoom, self.center);
        let (center, zoom, half) = (self.center, self.zoom, self.size() * 0.5);
        self.cache
            .get_or_insert_with(key, || (world - center) * zoom + half)
    }

    /// Exact inverse of `world_to_screen`. Returns the origin when zoom or
    /// surface is degenerate.
    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        if self.is_degenerate() {
            return DVec2::ZERO;
        }
        (screen - self.size() * 0.5) / self.zoom + self.center
    }

    /// Move the view by a screen-space pointer delta.
    pub fn pan_by_screen(&mut self, delta: DVec2) {
        if self.is_degenerate() {
            return;
        }
        self.set_center(self.center - delta / self.zoom);
    }

    /// Zoom so that the world point under `anchor` stays under it.
    pub fn zoom_toward(&mut self, anchor: DVec2, new_zoom: f64) {
        let new_zoom = self.clamp_zoom(new_zoom);
        if self.is_degenerate() || (new_zoom - self.zoom).abs() < 1e-12 {
            return;
        }
        let world = self.screen_to_world(anchor);
        let offset = anchor - self.size() * 0.5;
        self.center = world - offset / new_zoom;
        self.zoom = new_zoom;
        self.cache.clear();
    }

    /// Zoom that fits `min..max` with padding into the surface, unclamped.
    /// `None` when there is nothing to fit against.
    pub fn fit_zoom(&self, min: DVec2, max: DVec2) -> Option<f64> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let extent = (max - min) * (1.0 + 2.0 * self.fit_padding);
        let zx = (extent.x > f64::EPSILON).then(|| self.width / extent.x);
        let zy = (extent.y > f64::EPSILON).then(|| self.height / extent.y);
        match (zx, zy) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(z), None) | (None, Some(z)) => Some(z),
            (None, None) => None,
        }
    }

    /// Center on the bounding box of `points` and zoom to fit it.
    ///
    /// With no points the view resets to the origin at the default zoom. A
    /// fitted zoom below the configured minimum lowers the minimum so the
    /// whole set stays reachable.
    pub fn calculate_initial_view(&mut self, points: &[DVec2], config: &ViewConfig) {
        let (min_zoom, max_zoom, default_zoom) = zoom_limits(config);
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.default_zoom = default_zoom;
        self.fit_padding = config.fit_padding.max(0.0);
        self.cache.set_precision(config.cache_precision);

        let Some((min, max)) = bounds(points) else {
            self.set_view(DVec2::ZERO, self.default_zoom);
            log::info!("initial view: empty scene, default zoom {}", self.zoom);
            return;
        };

        let center = (min + max) * 0.5;
        let zoom = match self.fit_zoom(min, max) {
            Some(z) if z.is_finite() => {
                if z < self.min_zoom {
                    self.min_zoom = z;
                }
                z
            }
            _ => self.default_zoom,
        };
        if self.width <= 0.0 || self.height <= 0.0 {
            log::warn!("initial view on a zero-sized surface, keeping default zoom");
        }
        self.set_view(center, zoom);
        log::info!(
            "initial view: {} points, center ({:.1}, {:.1}), zoom {:.4}",
            points.len(),
            center.x,
            center.y,
            self.zoom
        );
    }

    /// Whether a screen point lies on the surface, allowing `margin` pixels
    /// outside.
    pub fn is_on_screen(&self, screen: DVec2, margin: f64) -> bool {
        screen.x >= -margin
            && screen.y >= -margin
            && screen.x <= self.width + margin
            && screen.y <= self.height + margin
    }
}

/// (min, max, default) zoom from a possibly unvalidated config.
///
/// Non-positive or non-finite bounds fall back to the defaults, inverted
/// bounds are swapped, and the default zoom is pulled inside them.
fn zoom_limits(config: &ViewConfig) -> (f64, f64, f64) {
    let fallback = ViewConfig::default();
    let usable = |z: f64, or: f64| if z.is_finite() && z > 0.0 { z } else { or };
    let a = usable(config.min_zoom, fallback.min_zoom);
    let b = usable(config.max_zoom, fallback.max_zoom);
    if a > b {
        log::warn!("view zoom bounds inverted ({a} > {b}), swapping");
    }
    let (min, max) = (a.min(b), a.max(b));
    let default = usable(config.default_zoom, fallback.default_zoom)
        .max(min)
        .min(max);
    (min, max, default)
}

/// Per-axis min and max, `None` for an empty slice.
pub fn bounds(points: &[DVec2]) -> Option<(DVec2, DVec2)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn view(width: f64, height: f64) -> ViewTransform {
        ViewTransform::new(width, height, &ViewConfig::default())
    }

    #[test]
    fn center_maps_to_surface_middle() {
        let mut v = view(800.0, 600.0);
        v.set_center(DVec2::new(10.0, -5.0));
        assert_eq!(v.world_to_screen(DVec2::new(10.0, -5.0)), DVec2::new(400.0, 300.0));
    }

    #[test]
    fn formula_matches_definition() {
        let mut v = view(200.0, 100.0);
        v.set_view(DVec2::new(1.0, 2.0), 4.0);
        let s = v.world_to_screen(DVec2::new(3.0, 0.0));
        assert_relative_eq!(s.x, (3.0 - 1.0) * 4.0 + 100.0);
        assert_relative_eq!(s.y, (0.0 - 2.0) * 4.0 + 50.0);
    }

    #[test]
    fn degenerate_surface_falls_back_to_origin() {
        let v = view(0.0, 600.0);
        assert_eq!(v.world_to_screen(DVec2::new(5.0, 5.0)), DVec2::ZERO);
        assert_eq!(v.screen_to_world(DVec2::new(5.0, 5.0)), DVec2::ZERO);
    }

    #[test]
    fn cache_is_cleared_on_zoom_and_center_change() {
        let mut v = view(800.0, 600.0);
        let p = DVec2::new(12.5, 7.25);
        let first = v.world_to_screen_cached(p);
        let again = v.world_to_screen_cached(p);
        assert_eq!(first, again);
        assert_eq!(v.cache().stats(), (1, 1));

        v.set_zoom(2.0);
        assert!(v.cache().is_empty());
        assert_eq!(v.world_to_screen_cached(p), v.world_to_screen(p));

        v.set_center(DVec2::new(3.0, 3.0));
        assert!(v.cache().is_empty());
        v.resize(640.0, 480.0);
        assert!(v.cache().is_empty());
    }

    #[test]
    fn zoom_toward_keeps_anchor_fixed() {
        let mut v = view(800.0, 600.0);
        v.set_center(DVec2::new(100.0, 50.0));
        let anchor = DVec2::new(620.0, 140.0);
        let before = v.screen_to_world(anchor);
        v.zoom_toward(anchor, 3.3);
        let after = v.screen_to_world(anchor);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-9);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-9);
        assert_relative_eq!(v.zoom(), 3.3);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut v = view(800.0, 600.0);
        v.set_zoom(1e6);
        assert_eq!(v.zoom(), ViewConfig::default().max_zoom);
        v.set_zoom(0.0);
        assert_eq!(v.zoom(), ViewConfig::default().min_zoom);
    }

    #[test]
    fn initial_view_fits_bounding_box() {
        let config = ViewConfig { fit_padding: 0.0, ..ViewConfig::default() };
        let mut v = ViewTransform::new(800.0, 600.0, &config);
        let points = [DVec2::new(-100.0, -50.0), DVec2::new(100.0, 50.0)];
        v.calculate_initial_view(&points, &config);
        assert_eq!(v.center(), DVec2::ZERO);
        assert_relative_eq!(v.zoom(), 4.0);
        for p in points {
            assert!(v.is_on_screen(v.world_to_screen(p), 1e-9));
        }
    }

    #[test]
    fn initial_view_lowers_min_zoom_for_huge_scenes() {
        let config = ViewConfig::default();
        let mut v = ViewTransform::new(100.0, 100.0, &config);
        let points = [DVec2::new(-1e5, 0.0), DVec2::new(1e5, 10.0)];
        v.calculate_initial_view(&points, &config);
        assert!(v.zoom() < config.min_zoom);
        assert_relative_eq!(v.min_zoom(), v.zoom());
    }

    #[test]
    fn initial_view_with_no_points_uses_default_zoom() {
        let config = ViewConfig::default();
        let mut v = ViewTransform::new(800.0, 600.0, &config);
        v.set_view(DVec2::new(40.0, 40.0), 7.0);
        v.calculate_initial_view(&[], &config);
        assert_eq!(v.zoom(), config.default_zoom);
        assert_eq!(v.center(), DVec2::ZERO);
    }

    #[test]
    fn pan_moves_opposite_to_drag_in_world() {
        let mut v = view(800.0, 600.0);
        v.set_zoom(2.0);
        v.pan_by_screen(DVec2::new(20.0, -10.0));
        assert_eq!(v.center(), DVec2::new(-10.0, 5.0));
    }

    #[test]
    fn inverted_zoom_bounds_are_swapped() {
        let config = ViewConfig {
            min_zoom: 5.0,
            max_zoom: 1.0,
            ..ViewConfig::default()
        };
        let mut v = ViewTransform::new(800.0, 600.0, &config);
        assert_eq!((v.min_zoom(), v.max_zoom()), (1.0, 5.0));
        assert_eq!(v.zoom(), 1.0);
        v.set_zoom(100.0);
        assert_eq!(v.zoom(), 5.0);
        v.calculate_initial_view(&[DVec2::new(-1.0, -1.0), DVec2::new(1.0, 1.0)], &config);
        assert!(v.zoom() <= 5.0);
    }

    #[test]
    fn unusable_zoom_bounds_fall_back_to_defaults() {
        let config = ViewConfig {
            min_zoom: f64::NAN,
            max_zoom: -3.0,
            ..ViewConfig::default()
        };
        let v = ViewTransform::new(800.0, 600.0, &config);
        let defaults = ViewConfig::default();
        assert_eq!(v.min_zoom(), defaults.min_zoom);
        assert_eq!(v.max_zoom(), defaults.max_zoom);
    }

    #[test]
    fn refit_applies_new_cache_precision() {
        let mut v = view(800.0, 600.0);
        v.world_to_screen_cached(DVec2::new(1.0, 1.0));
        assert_eq!(v.cache().len(), 1);
        let coarser = ViewConfig { cache_precision: 1, ..ViewConfig::default() };
        v.calculate_initial_view(&[], &coarser);
        assert!(v.cache().is_empty());

        v.world_to_screen_cached(DVec2::new(1.01, 1.0));
        v.world_to_screen_cached(DVec2::new(1.02, 1.0));
        assert_eq!(v.cache().len(), 1);
    }

    proptest! {
        #[test]
        fn screen_world_round_trip(
            sx in -2000.0f64..2000.0,
            sy in -2000.0f64..2000.0,
            zoom in 0.05f64..40.0,
            cx in -1e4f64..1e4,
            cy in -1e4f64..1e4,
            w in 1.0f64..4000.0,
            h in 1.0f64..4000.0,
        ) {
            let mut v = view(w, h);
            v.set_view(DVec2::new(cx, cy), zoom);
            let back = v.world_to_screen(v.screen_to_world(DVec2::new(sx, sy)));
            prop_assert!((back.x - sx).abs() < 1e-6);
            prop_assert!((back.y - sy).abs() < 1e-6);
        }
    }
}
