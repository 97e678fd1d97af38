use bytemuck::{Pod, Zeroable};

/// A circle on the map: a star system or a planet.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// Screen X in pixels.
    pub x: f32,
    /// Screen Y in pixels.
    pub y: f32,
    /// Radius in pixels.
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Opacity; selected bodies are drawn above 1.0 for a highlight.
    pub alpha: f32,
    /// `EntityRef::wire_id` of the body (systems > 0, planets < 0).
    pub id: f32,
}

/// A line segment in screen space, already clipped to the surface.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineInstance {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
}

pub const INSTANCE_FLOATS: usize = 8;
pub const INSTANCE_STRIDE_BYTES: usize = INSTANCE_FLOATS * 4;

/// Flat buffer of Pod instances read directly by the host renderer.
#[derive(Debug)]
pub struct RenderBuffer<T: Pod> {
    instances: Vec<T>,
}

impl<T: Pod> RenderBuffer<T> {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: T) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[T] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for reads from wasm memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl<T: Pod> Default for RenderBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
