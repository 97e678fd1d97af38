pub mod camera;
pub mod clip;
pub mod instance;
pub mod projection;

// Re-export key types for convenient access
pub use camera::{ScreenCache, ViewTransform};
pub use clip::{LineClipper, Segment};
pub use instance::{BodyInstance, LineInstance, RenderBuffer};
pub use projection::{ProjectionCache, ProjectionPlane};
