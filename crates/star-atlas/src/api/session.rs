//! One map session: entity snapshot, view state, caches and render buffers.

use glam::DVec2;

use crate::api::config::AtlasConfig;
use crate::api::error::{ConfigError, StoreError};
use crate::api::types::{EntityRef, SystemId};
use crate::components::planet::Planet;
use crate::components::star_system::StarSystem;
use crate::core::random::RandomSource;
use crate::core::time::Clock;
use crate::generation::UniverseGenerator;
use crate::input::{InputEvent, InputQueue, InteractionController, InteractionOutcome, MapTarget, ViewCommand};
use crate::renderer::camera::ViewTransform;
use crate::renderer::instance::{BodyInstance, LineInstance, RenderBuffer};
use crate::renderer::projection::{ProjectionCache, ProjectionPlane};
use crate::spatial::{connections, euclidean, nearby, LinkCache};
use crate::store::{MemoryStore, UniverseStore};
use crate::systems::orbit::OrbitalAnimator;
use crate::systems::render::{build_frame, FrameBuffers, FrameScene};

pub struct AtlasSession {
    config: AtlasConfig,
    store: MemoryStore,
    systems: Vec<StarSystem>,
    /// Bound planets of the system under focus.
    planets: Vec<Planet>,
    focused_system: Option<SystemId>,
    lanes: Vec<(usize, usize)>,
    controller: InteractionController,
    projections: ProjectionCache,
    links: LinkCache,
    animator: OrbitalAnimator,
    input: InputQueue,
    frame: FrameBuffers,
    now_ms: f64,
    frame_counter: u64,
}

impl AtlasSession {
    pub fn new(config: AtlasConfig, width: f64, height: f64) -> Self {
        Self::with_store(config, MemoryStore::new(), width, height)
    }

    /// Session over an existing store. The view is fitted to its systems.
    ///
    /// An invalid config is used as far as it can be: the view and the frame
    /// clock fall back to sane bounds instead of failing.
    pub fn with_store(config: AtlasConfig, store: MemoryStore, width: f64, height: f64) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("session config is invalid, using fallbacks: {err}");
        }
        let view = ViewTransform::new(width, height, &config.view);
        let controller = InteractionController::new(view, &config.interaction, &config.animation);
        let animator = OrbitalAnimator::new(&config.animation, 0.0);
        let mut session = Self {
            config,
            store,
            systems: Vec::new(),
            planets: Vec::new(),
            focused_system: None,
            lanes: Vec::new(),
            controller,
            projections: ProjectionCache::new(),
            links: LinkCache::new(),
            animator,
            input: InputQueue::new(),
            frame: FrameBuffers::new(),
            now_ms: 0.0,
            frame_counter: 0,
        };
        session.refresh_entities();
        session.fit_view();
        session
    }

    /// Generate `count` systems into the store and refit the view.
    pub fn generate(
        &mut self,
        rng: &mut dyn RandomSource,
        count: usize,
        min_distance: f64,
    ) -> Result<Vec<SystemId>, StoreError> {
        let ids = UniverseGenerator::new(&self.config.generation).generate_universe(
            &mut self.store,
            rng,
            count,
            min_distance,
        )?;
        self.refresh_entities();
        self.fit_view();
        Ok(ids)
    }

    /// Replace the configuration from JSON. Generation settings apply to the
    /// next `generate`; view settings, including the screen-cache precision,
    /// refit immediately. `animation.max_frame_step_ms` belongs to whoever
    /// owns the frame clock and is read back from `config()`.
    pub fn load_config(&mut self, json: &str) -> Result<(), ConfigError> {
        let config = AtlasConfig::from_json(json)?;
        self.controller.set_config(&config.interaction, &config.animation);
        self.animator.set_speed(config.animation.orbit_speed);
        self.animator.set_enabled(config.animation.orbits_enabled);
        let lanes_changed = config.view.connection_neighbors != self.config.view.connection_neighbors;
        self.config = config;
        if lanes_changed {
            self.refresh_entities();
        }
        self.fit_view();
        log::info!("config reloaded");
        Ok(())
    }

    /// Re-read systems from the store after it changed.
    pub fn refresh_entities(&mut self) {
        self.systems = self.store.systems().into_iter().cloned().collect();
        self.lanes = connections(&self.systems, self.config.view.connection_neighbors);
        self.projections.invalidate();
        self.links.on_entities_changed();
        self.reload_focus_planets();
        log::debug!(
            "entity snapshot: {} systems, {} lanes",
            self.systems.len(),
            self.lanes.len()
        );
    }

    fn reload_focus_planets(&mut self) {
        let focus = match self.controller.selection() {
            Some(EntityRef::System(id)) => Some(id),
            Some(EntityRef::Planet(pid)) => self.store.planet(pid).and_then(|p| p.system),
            None => None,
        };
        self.focused_system = focus;
        self.planets = match focus {
            Some(id) => self.store.planets_of(id).into_iter().cloned().collect(),
            None => Vec::new(),
        };
    }

    /// Refit the view to every system in the active plane.
    pub fn fit_view(&mut self) {
        let plane = self.controller.plane();
        let points = self.projections.get_or_build(plane, &self.systems).to_vec();
        self.controller
            .view_mut()
            .calculate_initial_view(&points, &self.config.view);
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Entities that can be picked or focused: all systems, plus the
    /// planets of the focused system at their current orbital positions.
    pub fn targets(&mut self) -> Vec<MapTarget> {
        let plane = self.controller.plane();
        let projected = self.projections.get_or_build(plane, &self.systems);
        let mut targets: Vec<MapTarget> = self
            .systems
            .iter()
            .zip(projected)
            .map(|(s, &p)| MapTarget {
                entity: EntityRef::System(s.id),
                position: s.position,
                projected: p,
            })
            .collect();

        if let Some(star) = self
            .focused_system
            .and_then(|id| self.systems.iter().find(|s| s.id == id))
        {
            for planet in &self.planets {
                let Some(orbit) = planet.orbit else {
                    continue;
                };
                let position = self.animator.position(&orbit, star.position, self.now_ms);
                targets.push(MapTarget {
                    entity: EntityRef::Planet(planet.id),
                    position,
                    projected: plane.project(position),
                });
            }
        }
        targets
    }

    /// Process queued input, advance animations and rebuild the frame.
    pub fn tick(&mut self, clock: &dyn Clock) {
        self.now_ms = clock.now_ms();
        // Targets are rebuilt lazily: commands can refit or reproject, and a
        // new selection brings its planets into reach.
        let mut targets: Option<Vec<MapTarget>> = None;
        for event in self.input.drain() {
            match event {
                InputEvent::Command(command) => {
                    self.apply_command(command, clock);
                    targets = None;
                }
                _ => {
                    let current = targets.get_or_insert_with(|| self.targets());
                    let outcome = self.controller.handle(&event, current, clock);
                    if self.after_interaction(outcome) {
                        targets = None;
                    }
                }
            }
        }
        self.controller.tick(clock);
        self.build_frame(self.now_ms);
        self.frame_counter += 1;
    }

    /// Returns true if the selection may have changed.
    fn after_interaction(&mut self, outcome: InteractionOutcome) -> bool {
        match outcome {
            InteractionOutcome::Selected(_) | InteractionOutcome::FocusStarted(_) => {
                self.links.on_selection_changed();
                self.reload_focus_planets();
                true
            }
            _ => false,
        }
    }

    pub fn apply_command(&mut self, command: ViewCommand, clock: &dyn Clock) {
        match command {
            ViewCommand::SetPlane(plane) => self.set_plane(plane),
            ViewCommand::ResetView => {
                self.controller.reset();
                self.fit_view();
            }
            ViewCommand::Resize { width, height } => {
                self.controller.view_mut().resize(width, height);
            }
            ViewCommand::Focus(entity) => {
                let targets = self.targets();
                if self.controller.focus(entity, &targets, clock) {
                    self.controller.set_selection(Some(entity));
                    self.after_interaction(InteractionOutcome::FocusStarted(entity));
                }
            }
            ViewCommand::ToggleOrbits => {
                self.animator.toggle();
                self.animator.restart(self.now_ms);
            }
        }
    }

    pub fn set_plane(&mut self, plane: ProjectionPlane) {
        if plane == self.controller.plane() {
            return;
        }
        self.controller.set_plane(plane);
        self.projections.invalidate();
        self.fit_view();
        log::info!("projection plane set to {}", plane.label());
    }

    /// Neighbours of the current selection, cached until it changes.
    pub fn selection_links(&mut self) -> Vec<EntityRef> {
        let Some(selection) = self.controller.selection() else {
            return Vec::new();
        };
        let systems = &self.systems;
        let count = self.config.interaction.focus_neighbor_count;
        self.links
            .get_or_compute(selection, || {
                let EntityRef::System(id) = selection else {
                    return Vec::new();
                };
                let Some(origin) = systems.iter().find(|s| s.id == id) else {
                    return Vec::new();
                };
                nearby(systems, origin, count, euclidean)
                    .into_iter()
                    .map(|n| n.entity)
                    .collect()
            })
            .to_vec()
    }

    /// Rebuild the render buffers for `now_ms`.
    pub fn build_frame(&mut self, now_ms: f64) {
        let links = self.selection_links();
        let plane = self.controller.plane();
        let projected = self.projections.get_or_build(plane, &self.systems);
        let scene = FrameScene {
            systems: &self.systems,
            projected,
            lanes: &self.lanes,
            planets: &self.planets,
            selection: self.controller.selection(),
            links: &links,
            plane,
            animator: &self.animator,
            now_ms,
            cull_margin: self.config.view.cull_margin,
        };
        build_frame(&scene, self.controller.view_mut(), &mut self.frame);
    }

    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Mutable store access. Call `refresh_entities` after changing it.
    pub fn store_mut(&mut self) -> &mut MemoryStore {
        &mut self.store
    }

    pub fn systems(&self) -> &[StarSystem] {
        &self.systems
    }

    pub fn lanes(&self) -> &[(usize, usize)] {
        &self.lanes
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn selection(&self) -> Option<EntityRef> {
        self.controller.selection()
    }

    pub fn plane(&self) -> ProjectionPlane {
        self.controller.plane()
    }

    pub fn zoom(&self) -> f64 {
        self.controller.view().zoom()
    }

    pub fn center(&self) -> DVec2 {
        self.controller.view().center()
    }

    pub fn orbits_enabled(&self) -> bool {
        self.animator.is_enabled()
    }

    pub fn bodies(&self) -> &RenderBuffer<BodyInstance> {
        &self.frame.bodies
    }

    pub fn lines(&self) -> &RenderBuffer<LineInstance> {
        &self.frame.lines
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }
}
