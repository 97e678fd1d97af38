//! Pointer, wheel and focus handling for the map.
//!
//! The controller owns the view state: transform, projection plane and
//! selection. It is the only thing that mutates them.

use glam::{DVec2, DVec3};

use crate::api::config::{AnimationConfig, InteractionConfig};
use crate::api::types::EntityRef;
use crate::core::time::Clock;
use crate::extensions::{Easing, ViewPose, ViewTween};
use crate::renderer::camera::{bounds, ViewTransform};
use crate::renderer::projection::ProjectionPlane;
use crate::spatial::{euclidean, nearby, Positioned};

use super::queue::InputEvent;

/// An entity as the controller sees it: 3D position for neighbour queries,
/// projected position for picking and framing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapTarget {
    pub entity: EntityRef,
    pub position: DVec3,
    pub projected: DVec2,
}

impl Positioned for MapTarget {
    fn entity(&self) -> EntityRef {
        self.entity
    }

    fn position(&self) -> DVec3 {
        self.position
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle,
    /// Pointer is down but has not moved past the drag threshold.
    PressPending { start: DVec2, pose: ViewPose },
    Dragging { last: DVec2 },
    Animating,
}

/// What an event did, for the session to react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionOutcome {
    None,
    Pressed,
    Panned,
    Zoomed,
    /// A click landed. `None` means empty space was clicked.
    Selected(Option<EntityRef>),
    FocusStarted(EntityRef),
}

#[derive(Debug, Clone, Copy)]
struct LastClick {
    entity: EntityRef,
    time_ms: f64,
}

pub struct InteractionController {
    config: InteractionConfig,
    zoom_duration_ms: f64,
    easing: Easing,
    view: ViewTransform,
    plane: ProjectionPlane,
    selection: Option<EntityRef>,
    state: InteractionState,
    animation: Option<ViewTween>,
    last_click: Option<LastClick>,
}

impl InteractionController {
    pub fn new(view: ViewTransform, interaction: &InteractionConfig, animation: &AnimationConfig) -> Self {
        Self {
            config: interaction.clone(),
            zoom_duration_ms: animation.zoom_duration_ms,
            easing: Easing::CubicInOut,
            view,
            plane: ProjectionPlane::default(),
            selection: None,
            state: InteractionState::Idle,
            animation: None,
            last_click: None,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewTransform {
        &mut self.view
    }

    pub fn pose(&self) -> ViewPose {
        ViewPose::new(self.view.center(), self.view.zoom())
    }

    pub fn plane(&self) -> ProjectionPlane {
        self.plane
    }

    /// Switch plane. In-flight animation targets the old plane and is dropped.
    pub fn set_plane(&mut self, plane: ProjectionPlane) {
        if plane != self.plane {
            self.cancel_animation();
            self.plane = plane;
        }
    }

    pub fn selection(&self) -> Option<EntityRef> {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Option<EntityRef>) {
        self.selection = selection;
    }

    pub fn animation(&self) -> Option<&ViewTween> {
        self.animation.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn set_config(&mut self, interaction: &InteractionConfig, animation: &AnimationConfig) {
        self.config = interaction.clone();
        self.zoom_duration_ms = animation.zoom_duration_ms;
    }

    /// Route one pointer or wheel event. Commands are not handled here.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        targets: &[MapTarget],
        clock: &dyn Clock,
    ) -> InteractionOutcome {
        match *event {
            InputEvent::PointerDown { x, y, .. } => self.pointer_down(DVec2::new(x, y)),
            InputEvent::PointerMove { x, y, .. } => self.pointer_move(DVec2::new(x, y)),
            InputEvent::PointerUp { x, y, time_ms } => {
                self.pointer_up(DVec2::new(x, y), time_ms, targets, clock)
            }
            InputEvent::Wheel { x, y, notches, .. } => self.wheel(DVec2::new(x, y), notches),
            InputEvent::Command(_) => InteractionOutcome::None,
        }
    }

    pub fn pointer_down(&mut self, pos: DVec2) -> InteractionOutcome {
        self.cancel_animation();
        self.state = InteractionState::PressPending {
            start: pos,
            pose: self.pose(),
        };
        InteractionOutcome::Pressed
    }

    pub fn pointer_move(&mut self, pos: DVec2) -> InteractionOutcome {
        match self.state {
            InteractionState::PressPending { start, .. } => {
                if pos.distance(start) > self.config.drag_threshold_px {
                    self.cancel_animation();
                    self.view.pan_by_screen(pos - start);
                    self.state = InteractionState::Dragging { last: pos };
                    InteractionOutcome::Panned
                } else {
                    InteractionOutcome::None
                }
            }
            InteractionState::Dragging { last } => {
                self.cancel_animation();
                self.view.pan_by_screen(pos - last);
                self.state = InteractionState::Dragging { last: pos };
                InteractionOutcome::Panned
            }
            InteractionState::Idle | InteractionState::Animating => InteractionOutcome::None,
        }
    }

    pub fn pointer_up(
        &mut self,
        pos: DVec2,
        time_ms: f64,
        targets: &[MapTarget],
        clock: &dyn Clock,
    ) -> InteractionOutcome {
        match self.state {
            InteractionState::PressPending { .. } => {
                self.release();
                self.click(pos, time_ms, targets, clock)
            }
            InteractionState::Dragging { .. } => {
                self.release();
                InteractionOutcome::None
            }
            InteractionState::Idle | InteractionState::Animating => InteractionOutcome::None,
        }
    }

    /// End a gesture; a transition started during it carries on.
    fn release(&mut self) {
        self.state = if self.animation.is_some() {
            InteractionState::Animating
        } else {
            InteractionState::Idle
        };
    }

    /// Zoom by the wheel factor per notch, anchored at `pos`.
    pub fn wheel(&mut self, pos: DVec2, notches: f64) -> InteractionOutcome {
        self.cancel_animation();
        if notches == 0.0 || !notches.is_finite() {
            return InteractionOutcome::None;
        }
        let target = self.view.zoom() * self.config.wheel_zoom_factor.powf(notches);
        self.view.zoom_toward(pos, target);
        InteractionOutcome::Zoomed
    }

    fn click(
        &mut self,
        pos: DVec2,
        time_ms: f64,
        targets: &[MapTarget],
        clock: &dyn Clock,
    ) -> InteractionOutcome {
        let hit = self.pick(pos, targets);

        if let (Some(entity), Some(last)) = (hit, self.last_click) {
            let since = time_ms - last.time_ms;
            if last.entity == entity && (0.0..=self.config.double_click_ms).contains(&since) {
                self.last_click = None;
                self.selection = Some(entity);
                if self.focus(entity, targets, clock) {
                    return InteractionOutcome::FocusStarted(entity);
                }
                return InteractionOutcome::Selected(hit);
            }
        }

        self.last_click = hit.map(|entity| LastClick { entity, time_ms });
        self.selection = hit;
        InteractionOutcome::Selected(hit)
    }

    /// Nearest target within the click radius of a screen position.
    pub fn pick(&self, pos: DVec2, targets: &[MapTarget]) -> Option<EntityRef> {
        let radius = self.config.click_radius_px;
        targets
            .iter()
            .map(|t| (t.entity, self.view.world_to_screen(t.projected).distance(pos)))
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(entity, _)| entity)
    }

    /// Animate toward a pose framing `entity` and its nearest neighbours.
    /// Returns false if the entity is not among `targets`.
    pub fn focus(&mut self, entity: EntityRef, targets: &[MapTarget], clock: &dyn Clock) -> bool {
        let Some(target) = targets.iter().find(|t| t.entity == entity) else {
            log::warn!("focus on unknown entity {entity:?}");
            return false;
        };

        let mut framed = vec![target.projected];
        framed.extend(
            nearby(targets, target, self.config.focus_neighbor_count, euclidean)
                .iter()
                .map(|n| targets[n.index].projected),
        );

        let (center, zoom) = match bounds(&framed) {
            Some((min, max)) => {
                let zoom = self.view.fit_zoom(min, max).unwrap_or(self.view.zoom());
                ((min + max) * 0.5, zoom)
            }
            None => (target.projected, self.view.zoom()),
        };
        let to = ViewPose::new(center, self.view.clamp_zoom(zoom));
        self.start_animation(to, clock);
        true
    }

    /// Start a transition from the current pose, replacing any running one.
    /// A press or drag in progress keeps its state, so its pointer-up still
    /// resolves; a drag cancels the transition on its next move.
    pub fn start_animation(&mut self, to: ViewPose, clock: &dyn Clock) {
        if self.animation.is_some() {
            log::debug!("replacing in-flight view animation");
        }
        self.animation = Some(ViewTween::new(
            self.pose(),
            to,
            clock.now_ms(),
            self.zoom_duration_ms,
            self.easing,
        ));
        if matches!(self.state, InteractionState::Idle) {
            self.state = InteractionState::Animating;
        }
    }

    /// Drop the running animation. The view keeps its last applied frame.
    pub fn cancel_animation(&mut self) {
        if self.animation.take().is_some() {
            log::debug!("view animation cancelled");
        }
        if self.state == InteractionState::Animating {
            self.state = InteractionState::Idle;
        }
    }

    /// Apply the current animation frame. Returns true if the view moved.
    pub fn tick(&mut self, clock: &dyn Clock) -> bool {
        let Some(tween) = self.animation else {
            return false;
        };
        let now = clock.now_ms();
        let pose = tween.sample(now);
        self.view.set_view(pose.center, pose.zoom);
        if tween.is_finished(now) {
            self.animation = None;
            if self.state == InteractionState::Animating {
                self.state = InteractionState::Idle;
            }
        }
        true
    }

    /// Back to Idle without an animation; selection is kept.
    pub fn reset(&mut self) {
        self.cancel_animation();
        self.state = InteractionState::Idle;
        self.last_click = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::ViewConfig;
    use crate::api::types::SystemId;
    use crate::core::time::ManualClock;

    fn controller() -> InteractionController {
        let view = ViewTransform::new(800.0, 600.0, &ViewConfig::default());
        InteractionController::new(view, &InteractionConfig::default(), &AnimationConfig::default())
    }

    fn target(id: u32, x: f64, y: f64) -> MapTarget {
        MapTarget {
            entity: EntityRef::System(SystemId(id)),
            position: DVec3::new(x, y, 0.0),
            projected: DVec2::new(x, y),
        }
    }

    fn screen_of(c: &InteractionController, t: &MapTarget) -> DVec2 {
        c.view().world_to_screen(t.projected)
    }

    #[test]
    fn small_move_stays_pending() {
        let mut c = controller();
        c.pointer_down(DVec2::new(100.0, 100.0));
        assert_eq!(c.pointer_move(DVec2::new(102.0, 101.0)), InteractionOutcome::None);
        assert!(matches!(c.state(), InteractionState::PressPending { .. }));
    }

    #[test]
    fn drag_pans_by_inverse_scaled_delta() {
        let mut c = controller();
        c.view_mut().set_zoom(2.0);
        c.pointer_down(DVec2::new(100.0, 100.0));
        assert_eq!(c.pointer_move(DVec2::new(120.0, 100.0)), InteractionOutcome::Panned);
        assert!(matches!(c.state(), InteractionState::Dragging { .. }));
        assert_eq!(c.view().center(), DVec2::new(-10.0, 0.0));
        c.pointer_move(DVec2::new(120.0, 140.0));
        assert_eq!(c.view().center(), DVec2::new(-10.0, -20.0));

        let clock = ManualClock::new(0.0);
        assert_eq!(c.pointer_up(DVec2::new(120.0, 140.0), 10.0, &[], &clock), InteractionOutcome::None);
        assert_eq!(c.state(), InteractionState::Idle);
    }

    #[test]
    fn click_selects_nearest_within_radius() {
        let mut c = controller();
        let clock = ManualClock::new(0.0);
        let targets = [target(1, 0.0, 0.0), target(2, 5.0, 0.0)];
        let at = screen_of(&c, &targets[1]) + DVec2::new(1.0, 0.0);
        c.pointer_down(at);
        let outcome = c.pointer_up(at, 0.0, &targets, &clock);
        assert_eq!(outcome, InteractionOutcome::Selected(Some(targets[1].entity)));
        assert_eq!(c.selection(), Some(targets[1].entity));

        let empty = DVec2::new(700.0, 500.0);
        c.pointer_down(empty);
        assert_eq!(c.pointer_up(empty, 1000.0, &targets, &clock), InteractionOutcome::Selected(None));
        assert_eq!(c.selection(), None);
    }

    #[test]
    fn double_click_starts_focus_animation() {
        let mut c = controller();
        let clock = ManualClock::new(5000.0);
        let targets = [target(1, 0.0, 0.0), target(2, 40.0, 0.0), target(3, 0.0, 30.0)];
        let at = screen_of(&c, &targets[0]);
        c.pointer_down(at);
        c.pointer_up(at, 100.0, &targets, &clock);
        c.pointer_down(at);
        let outcome = c.pointer_up(at, 250.0, &targets, &clock);
        assert_eq!(outcome, InteractionOutcome::FocusStarted(targets[0].entity));
        assert_eq!(c.state(), InteractionState::Animating);
        assert!(c.is_animating());
    }

    #[test]
    fn slow_second_click_is_a_plain_click() {
        let mut c = controller();
        let clock = ManualClock::new(0.0);
        let targets = [target(1, 0.0, 0.0)];
        let at = screen_of(&c, &targets[0]);
        c.pointer_down(at);
        c.pointer_up(at, 0.0, &targets, &clock);
        c.pointer_down(at);
        let outcome = c.pointer_up(at, 900.0, &targets, &clock);
        assert_eq!(outcome, InteractionOutcome::Selected(Some(targets[0].entity)));
        assert!(!c.is_animating());
    }

    #[test]
    fn animation_runs_to_target_and_idles() {
        let mut c = controller();
        let mut clock = ManualClock::new(0.0);
        let to = ViewPose::new(DVec2::new(50.0, 50.0), 4.0);
        c.start_animation(to, &clock);
        clock.advance(300.0);
        assert!(c.tick(&clock));
        assert!(c.view().zoom() > 1.0 && c.view().zoom() < 4.0);
        clock.advance(1000.0);
        c.tick(&clock);
        assert_eq!(c.pose(), to);
        assert_eq!(c.state(), InteractionState::Idle);
        assert!(!c.tick(&clock));
    }

    #[test]
    fn focus_during_press_keeps_the_click() {
        let mut c = controller();
        let clock = ManualClock::new(0.0);
        let targets = [target(1, 0.0, 0.0), target(2, 40.0, 0.0), target(3, 0.0, 30.0)];
        let at = screen_of(&c, &targets[1]);
        c.pointer_down(at);
        assert!(c.focus(targets[0].entity, &targets, &clock));
        assert!(matches!(c.state(), InteractionState::PressPending { .. }));
        assert!(c.is_animating());

        let outcome = c.pointer_up(at, 10.0, &targets, &clock);
        assert_eq!(outcome, InteractionOutcome::Selected(Some(targets[1].entity)));
        assert!(c.is_animating());
        assert_eq!(c.state(), InteractionState::Animating);
    }

    #[test]
    fn drag_after_focus_cancels_the_flight() {
        let mut c = controller();
        let clock = ManualClock::new(0.0);
        let targets = [target(1, 0.0, 0.0), target(2, 40.0, 0.0)];
        c.pointer_down(DVec2::new(100.0, 100.0));
        c.focus(targets[0].entity, &targets, &clock);
        assert_eq!(c.pointer_move(DVec2::new(150.0, 100.0)), InteractionOutcome::Panned);
        assert!(!c.is_animating());
        assert!(matches!(c.state(), InteractionState::Dragging { .. }));
    }

    #[test]
    fn pointer_down_freezes_animation() {
        let mut c = controller();
        let mut clock = ManualClock::new(0.0);
        c.start_animation(ViewPose::new(DVec2::new(100.0, 0.0), 8.0), &clock);
        clock.advance(200.0);
        c.tick(&clock);
        let frozen = c.pose();

        c.pointer_down(DVec2::new(10.0, 10.0));
        assert!(!c.is_animating());
        clock.advance(200.0);
        c.tick(&clock);
        assert_eq!(c.pose(), frozen);
    }

    #[test]
    fn wheel_cancels_animation_and_keeps_anchor() {
        let mut c = controller();
        let clock = ManualClock::new(0.0);
        c.start_animation(ViewPose::new(DVec2::new(100.0, 0.0), 8.0), &clock);
        let anchor = DVec2::new(600.0, 120.0);
        let before = c.view().screen_to_world(anchor);
        assert_eq!(c.wheel(anchor, 1.0), InteractionOutcome::Zoomed);
        assert!(!c.is_animating());
        let after = c.view().screen_to_world(anchor);
        assert!((before - after).length() < 1e-9);
        assert!((c.view().zoom() - 1.1).abs() < 1e-12);
    }
}
