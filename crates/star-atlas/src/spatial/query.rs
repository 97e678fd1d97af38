//! Distance queries over positioned entities.
//!
//! All queries are pure and tolerate empty input.

use std::collections::BTreeSet;

use glam::DVec3;

use crate::api::types::EntityRef;
use crate::components::planet::Planet;
use crate::components::star_system::StarSystem;

/// Something with an identity and a 3D world position.
pub trait Positioned {
    fn entity(&self) -> EntityRef;
    fn position(&self) -> DVec3;
}

impl Positioned for StarSystem {
    fn entity(&self) -> EntityRef {
        EntityRef::System(self.id)
    }

    fn position(&self) -> DVec3 {
        self.position
    }
}

impl Positioned for Planet {
    fn entity(&self) -> EntityRef {
        EntityRef::Planet(self.id)
    }

    fn position(&self) -> DVec3 {
        self.position
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn entity(&self) -> EntityRef {
        (**self).entity()
    }

    fn position(&self) -> DVec3 {
        (**self).position()
    }
}

/// 3D Euclidean distance.
pub fn euclidean(a: DVec3, b: DVec3) -> f64 {
    a.distance(b)
}

/// A query hit: index into the input slice and its distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub entity: EntityRef,
    pub distance: f64,
}

/// Up to `max_count` entities closest to `origin`, nearest first.
///
/// The origin itself is excluded by identity. Equal distances keep input
/// order; NaN distances sort last.
pub fn nearby<T, F>(entities: &[T], origin: &T, max_count: usize, distance_fn: F) -> Vec<Neighbor>
where
    T: Positioned,
    F: Fn(DVec3, DVec3) -> f64,
{
    let from = origin.position();
    let skip = origin.entity();
    nearest_to_point(entities, from, Some(skip), max_count, distance_fn)
}

/// Like `nearby`, but measured from an arbitrary point. `exclude` drops one
/// entity by identity.
pub fn nearest_to_point<T, F>(
    entities: &[T],
    point: DVec3,
    exclude: Option<EntityRef>,
    max_count: usize,
    distance_fn: F,
) -> Vec<Neighbor>
where
    T: Positioned,
    F: Fn(DVec3, DVec3) -> f64,
{
    let mut hits: Vec<Neighbor> = entities
        .iter()
        .enumerate()
        .filter(|(_, e)| Some(e.entity()) != exclude)
        .map(|(index, e)| Neighbor {
            index,
            entity: e.entity(),
            distance: distance_fn(point, e.position()),
        })
        .collect();
    hits.sort_by(|a, b| match (a.distance.is_nan(), b.distance.is_nan()) {
        (false, false) => a.distance.total_cmp(&b.distance),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    });
    hits.truncate(max_count);
    hits
}

/// Entities whose 3D distance to `point` is at most `radius`, in input order.
pub fn within_radius<T: Positioned>(entities: &[T], point: DVec3, radius: f64) -> Vec<&T> {
    entities
        .iter()
        .filter(|e| euclidean(e.position(), point) <= radius)
        .collect()
}

/// Undirected edges linking every entity to its `k` nearest neighbours.
///
/// Each edge is reported once as `(low, high)` indices into `entities`,
/// sorted ascending.
pub fn connections<T: Positioned>(entities: &[T], k: usize) -> Vec<(usize, usize)> {
    if k == 0 {
        return Vec::new();
    }
    let mut edges = BTreeSet::new();
    for (i, entity) in entities.iter().enumerate() {
        for hit in nearby(entities, entity, k, euclidean) {
            let j = hit.index;
            if i != j {
                edges.insert((i.min(j), i.max(j)));
            }
        }
    }
    edges.into_iter().collect()
}
