use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::spatial::Positioned;

/// One of the three axis-aligned viewing planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectionPlane {
    #[default]
    XY,
    XZ,
    YZ,
}

impl ProjectionPlane {
    pub const ALL: [ProjectionPlane; 3] = [ProjectionPlane::XY, ProjectionPlane::XZ, ProjectionPlane::YZ];

    /// Drop the axis perpendicular to the plane.
    pub fn project(self, p: DVec3) -> DVec2 {
        match self {
            ProjectionPlane::XY => DVec2::new(p.x, p.y),
            ProjectionPlane::XZ => DVec2::new(p.x, p.z),
            ProjectionPlane::YZ => DVec2::new(p.y, p.z),
        }
    }

    /// Wire index used by the host: 0 = XY, 1 = XZ, 2 = YZ.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        match self {
            ProjectionPlane::XY => 0,
            ProjectionPlane::XZ => 1,
            ProjectionPlane::YZ => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectionPlane::XY => "XY",
            ProjectionPlane::XZ => "XZ",
            ProjectionPlane::YZ => "YZ",
        }
    }
}

/// Projected 2D positions, index-aligned with the entity slice they were
/// built from.
///
/// The owner must call `invalidate` when the plane or the entity set changes.
#[derive(Debug, Default)]
pub struct ProjectionCache {
    plane: Option<ProjectionPlane>,
    points: Vec<DVec2>,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build<T: Positioned>(&mut self, plane: ProjectionPlane, entities: &[T]) -> &[DVec2] {
        if self.plane != Some(plane) || self.points.len() != entities.len() {
            self.points.clear();
            self.points
                .extend(entities.iter().map(|e| plane.project(e.position())));
            self.plane = Some(plane);
        }
        &self.points
    }

    pub fn is_valid_for(&self, plane: ProjectionPlane) -> bool {
        self.plane == Some(plane)
    }

    pub fn invalidate(&mut self) {
        self.plane = None;
        self.points.clear();
    }
}
