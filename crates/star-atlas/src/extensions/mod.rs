// extensions/mod.rs
//
// Animation helpers used by the interaction controller.
// Decoupled from view state: they only compute poses.

pub mod easing;
pub mod tween;

pub use easing::{ease, ease_dvec2, lerp, lerp_dvec2, Easing};
pub use tween::{ViewPose, ViewTween};
