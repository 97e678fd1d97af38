use glam::DVec2;

use crate::api::types::EntityRef;
use crate::components::planet::{Planet, PlanetType};
use crate::components::star_system::StarSystem;
use crate::generation::tables::star_visual;
use crate::renderer::camera::ViewTransform;
use crate::renderer::clip::LineClipper;
use crate::renderer::instance::{BodyInstance, LineInstance, RenderBuffer};
use crate::renderer::projection::ProjectionPlane;
use crate::systems::orbit::OrbitalAnimator;

const LANE_COLOR: [f32; 4] = [0.35, 0.45, 0.6, 0.35];
const LINK_COLOR: [f32; 4] = [0.95, 0.8, 0.3, 0.9];
const ORBIT_LINE_COLOR: [f32; 4] = [0.5, 0.6, 0.7, 0.25];

/// Alpha of a selected body; above 1 the host draws a highlight ring.
const SELECTED_ALPHA: f32 = 1.5;
const UNDISCOVERED_ALPHA: f32 = 0.55;

/// Star radius scales with √zoom, within these pixel bounds.
const MIN_STAR_RADIUS: f64 = 1.0;
const MAX_STAR_RADIUS: f64 = 24.0;
const PLANET_RADIUS: f64 = 3.0;

pub fn planet_color(planet_type: PlanetType) -> [f32; 3] {
    match planet_type {
        PlanetType::Terrestrial => [0.55, 0.7, 0.45],
        PlanetType::GasGiant => [0.85, 0.65, 0.4],
        PlanetType::IceGiant => [0.6, 0.85, 0.95],
        PlanetType::Desert => [0.9, 0.75, 0.45],
        PlanetType::Ocean => [0.25, 0.5, 0.9],
    }
}

/// Everything a frame is drawn from.
pub struct FrameScene<'a> {
    pub systems: &'a [StarSystem],
    /// Projected system positions, index-aligned with `systems`.
    pub projected: &'a [DVec2],
    /// Star-lane edges as index pairs into `systems`.
    pub lanes: &'a [(usize, usize)],
    /// Bound planets of the focused system.
    pub planets: &'a [Planet],
    pub selection: Option<EntityRef>,
    /// Neighbours linked to the selection.
    pub links: &'a [EntityRef],
    pub plane: ProjectionPlane,
    pub animator: &'a OrbitalAnimator,
    pub now_ms: f64,
    pub cull_margin: f64,
}

/// Render buffers handed to the host each frame.
#[derive(Debug, Default)]
pub struct FrameBuffers {
    pub bodies: RenderBuffer<BodyInstance>,
    pub lines: RenderBuffer<LineInstance>,
}

impl FrameBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
        self.lines.clear();
    }
}

fn push_line(out: &mut FrameBuffers, clipper: &LineClipper, a: DVec2, b: DVec2, color: [f32; 4]) {
    if let Some(seg) = clipper.clip(a, b) {
        out.lines.push(LineInstance {
            x1: seg.a.x as f32,
            y1: seg.a.y as f32,
            x2: seg.b.x as f32,
            y2: seg.b.y as f32,
            r: color[0],
            g: color[1],
            b: color[2],
            alpha: color[3],
        });
    }
}

/// Rebuild both buffers for the current view.
///
/// Lines are clipped to the surface; bodies outside it (plus margin) are
/// culled. An empty scene yields empty buffers.
pub fn build_frame(scene: &FrameScene<'_>, view: &mut ViewTransform, out: &mut FrameBuffers) {
    out.clear();
    if scene.systems.is_empty() || scene.projected.len() != scene.systems.len() {
        return;
    }

    let size = view.size();
    let clipper = LineClipper::new(size.x, size.y);
    let screen: Vec<DVec2> = scene
        .projected
        .iter()
        .map(|&p| view.world_to_screen_cached(p))
        .collect();

    for &(i, j) in scene.lanes {
        if let (Some(&a), Some(&b)) = (screen.get(i), screen.get(j)) {
            push_line(out, &clipper, a, b, LANE_COLOR);
        }
    }

    let focused_system = scene.selection.and_then(|sel| match sel {
        EntityRef::System(id) => scene.systems.iter().position(|s| s.id == id),
        EntityRef::Planet(pid) => scene
            .planets
            .iter()
            .find(|p| p.id == pid)
            .and_then(|p| p.system)
            .and_then(|sid| scene.systems.iter().position(|s| s.id == sid)),
    });

    if let Some(from) = focused_system {
        for link in scene.links {
            let EntityRef::System(id) = *link else {
                continue;
            };
            if let Some(to) = scene.systems.iter().position(|s| s.id == id) {
                push_line(out, &clipper, screen[from], screen[to], LINK_COLOR);
            }
        }
    }

    let zoom = view.zoom();
    let star_scale = zoom.max(0.0).sqrt();
    for (system, &at) in scene.systems.iter().zip(&screen) {
        let visual = star_visual(system.star_type);
        let radius = (visual.radius as f64 * star_scale).clamp(MIN_STAR_RADIUS, MAX_STAR_RADIUS);
        if !view.is_on_screen(at, scene.cull_margin + radius) {
            continue;
        }
        let entity = EntityRef::System(system.id);
        let alpha = if scene.selection == Some(entity) {
            SELECTED_ALPHA
        } else if system.discovered {
            1.0
        } else {
            UNDISCOVERED_ALPHA
        };
        out.bodies.push(BodyInstance {
            x: at.x as f32,
            y: at.y as f32,
            radius: radius as f32,
            r: visual.color[0],
            g: visual.color[1],
            b: visual.color[2],
            alpha,
            id: entity.wire_id(),
        });
    }

    let Some(focus) = focused_system else {
        return;
    };
    let star = &scene.systems[focus];
    for planet in scene.planets.iter().filter(|p| p.system == Some(star.id)) {
        let Some(orbit) = planet.orbit else {
            continue;
        };
        let world = scene
            .plane
            .project(scene.animator.position(&orbit, star.position, scene.now_ms));
        let at = view.world_to_screen(world);
        push_line(out, &clipper, screen[focus], at, ORBIT_LINE_COLOR);
        if !view.is_on_screen(at, scene.cull_margin + PLANET_RADIUS) {
            continue;
        }
        let entity = EntityRef::Planet(planet.id);
        let color = planet_color(planet.planet_type);
        out.bodies.push(BodyInstance {
            x: at.x as f32,
            y: at.y as f32,
            radius: PLANET_RADIUS as f32,
            r: color[0],
            g: color[1],
            b: color[2],
            alpha: if scene.selection == Some(entity) { SELECTED_ALPHA } else { 1.0 },
            id: entity.wire_id(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::{AnimationConfig, ViewConfig};
    use crate::api::types::{PlanetId, SystemId};
    use crate::components::planet::{Characteristics, Orbit};
    use crate::components::star_system::StarType;
    use glam::DVec3;

    fn system(id: u32, x: f64, y: f64) -> StarSystem {
        let mut s = StarSystem::new(format!("S{id}"), DVec3::new(x, y, 0.0), StarType::YellowDwarf);
        s.id = SystemId(id);
        s
    }

    fn planet(id: u32, system: u32, distance: f64) -> Planet {
        Planet {
            id: PlanetId(id),
            system: Some(SystemId(system)),
            name: format!("P{id}"),
            description: String::new(),
            planet_type: PlanetType::Ocean,
            traits: Characteristics::default(),
            position: DVec3::ZERO,
            orbit: Some(Orbit { distance, angle_deg: 0.0, inclination_deg: 0.0 }),
        }
    }

    fn scene<'a>(
        systems: &'a [StarSystem],
        projected: &'a [DVec2],
        lanes: &'a [(usize, usize)],
        planets: &'a [Planet],
        animator: &'a OrbitalAnimator,
    ) -> FrameScene<'a> {
        FrameScene {
            systems,
            projected,
            lanes,
            planets,
            selection: None,
            links: &[],
            plane: ProjectionPlane::XY,
            animator,
            now_ms: 0.0,
            cull_margin: 0.0,
        }
    }

    #[test]
    fn empty_scene_builds_empty_buffers() {
        let animator = OrbitalAnimator::new(&AnimationConfig::default(), 0.0);
        let mut view = ViewTransform::new(800.0, 600.0, &ViewConfig::default());
        let mut out = FrameBuffers::new();
        out.bodies.push(BodyInstance::default());
        build_frame(&scene(&[], &[], &[], &[], &animator), &mut view, &mut out);
        assert!(out.bodies.is_empty());
        assert!(out.lines.is_empty());
    }

    #[test]
    fn off_screen_stars_are_culled_and_lanes_clipped() {
        let animator = OrbitalAnimator::new(&AnimationConfig::default(), 0.0);
        let mut view = ViewTransform::new(800.0, 600.0, &ViewConfig::default());
        let systems = [system(1, 0.0, 0.0), system(2, 5000.0, 0.0)];
        let projected: Vec<DVec2> = systems.iter().map(|s| s.position.truncate()).collect();
        let lanes = [(0, 1)];
        let mut out = FrameBuffers::new();
        build_frame(&scene(&systems, &projected, &lanes, &[], &animator), &mut view, &mut out);

        assert_eq!(out.bodies.instance_count(), 1);
        assert_eq!(out.bodies.instances()[0].id, 1.0);
        assert_eq!(out.lines.instance_count(), 1);
        let line = out.lines.instances()[0];
        assert_eq!((line.x1, line.y1), (400.0, 300.0));
        assert_eq!((line.x2, line.y2), (800.0, 300.0));
    }

    #[test]
    fn selected_system_shows_planets_and_links() {
        let animator = OrbitalAnimator::new(&AnimationConfig::default(), 0.0);
        let mut view = ViewTransform::new(800.0, 600.0, &ViewConfig::default());
        let systems = [system(1, 0.0, 0.0), system(2, 100.0, 0.0)];
        let projected: Vec<DVec2> = systems.iter().map(|s| s.position.truncate()).collect();
        let planets = [planet(7, 1, 20.0), planet(8, 2, 10.0)];
        let links = [EntityRef::System(SystemId(2))];
        let mut frame = scene(&systems, &projected, &[], &planets, &animator);
        frame.selection = Some(EntityRef::System(SystemId(1)));
        frame.links = &links;

        let mut out = FrameBuffers::new();
        build_frame(&frame, &mut view, &mut out);

        let ids: Vec<f32> = out.bodies.instances().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1.0, 2.0, -7.0]);
        assert_eq!(out.bodies.instances()[0].alpha, SELECTED_ALPHA);
        let planet_body = out.bodies.instances()[2];
        assert_eq!((planet_body.x, planet_body.y), (420.0, 300.0));
        // One selection link plus one orbit spoke.
        assert_eq!(out.lines.instance_count(), 2);
    }
}
