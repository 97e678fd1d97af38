//! `#[wasm_bindgen]` exports for the star map.
//!
//! One AtlasRunner lives in a `thread_local!`. The host calls `atlas_init`
//! once, feeds pointer events, calls `atlas_tick` from its frame callback and
//! reads the header and instance buffers straight out of wasm memory.

pub mod runner;

pub use runner::AtlasRunner;

use std::cell::RefCell;

use star_atlas::{AtlasConfig, InputEvent, ViewCommand};
use wasm_bindgen::prelude::*;

/// Browsers report one wheel notch as roughly this many pixels of deltaY.
const WHEEL_PIXELS_PER_NOTCH: f64 = 100.0;

thread_local! {
    static RUNNER: RefCell<Option<AtlasRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the runner, or return `R::default()` before init.
fn with_runner<R: Default>(f: impl FnOnce(&mut AtlasRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::warn!("star atlas not initialized; call atlas_init() first");
            R::default()
        }
    })
}

fn push_pointer(make: impl FnOnce(f64) -> InputEvent) {
    with_runner(|r| {
        let event = make(r.now_ms());
        r.push_input(event);
    });
}

#[wasm_bindgen]
pub fn atlas_init(seed: u32, system_count: u32, width: f64, height: f64) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = AtlasRunner::new(
        AtlasConfig::default(),
        u64::from(seed),
        system_count as usize,
        width,
        height,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("star atlas: initialized with {system_count} systems (seed {seed})");
    Ok(())
}

/// Apply a JSON config override. Errors come back as strings.
#[wasm_bindgen]
pub fn atlas_load_config(json: &str) -> Result<(), JsValue> {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => runner
            .load_config(json)
            .map_err(|e| JsValue::from_str(&e.to_string())),
        None => Err(JsValue::from_str("star atlas not initialized")),
    })
}

/// Advance using the host wall clock and rebuild the frame.
#[wasm_bindgen]
pub fn atlas_tick() {
    let now = js_sys::Date::now();
    with_runner(|r| r.tick_at(now));
}

#[wasm_bindgen]
pub fn atlas_pointer_down(x: f64, y: f64) {
    push_pointer(|time_ms| InputEvent::PointerDown { x, y, time_ms });
}

#[wasm_bindgen]
pub fn atlas_pointer_move(x: f64, y: f64) {
    push_pointer(|time_ms| InputEvent::PointerMove { x, y, time_ms });
}

#[wasm_bindgen]
pub fn atlas_pointer_up(x: f64, y: f64) {
    push_pointer(|time_ms| InputEvent::PointerUp { x, y, time_ms });
}

/// `delta_y` is the DOM WheelEvent value; scrolling up zooms in.
#[wasm_bindgen]
pub fn atlas_wheel(x: f64, y: f64, delta_y: f64) {
    let notches = -delta_y / WHEEL_PIXELS_PER_NOTCH;
    push_pointer(|time_ms| InputEvent::Wheel { x, y, notches, time_ms });
}

#[wasm_bindgen]
pub fn atlas_resize(width: f64, height: f64) {
    with_runner(|r| r.command(ViewCommand::Resize { width, height }));
}

/// 0 = XY, 1 = XZ, 2 = YZ.
#[wasm_bindgen]
pub fn atlas_set_plane(index: u32) {
    with_runner(|r| r.set_plane_index(index));
}

#[wasm_bindgen]
pub fn atlas_reset_view() {
    with_runner(|r| r.command(ViewCommand::ResetView));
}

#[wasm_bindgen]
pub fn atlas_toggle_orbits() {
    with_runner(|r| r.command(ViewCommand::ToggleOrbits));
}

#[wasm_bindgen]
pub fn atlas_focus_system(id: u32) {
    with_runner(|r| r.focus_system(id));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_header_ptr() -> *const f32 {
    RUNNER.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(std::ptr::null(), |r| r.header_ptr())
    })
}

#[wasm_bindgen]
pub fn get_bodies_ptr() -> *const f32 {
    RUNNER.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(std::ptr::null(), |r| r.body_ptr())
    })
}

#[wasm_bindgen]
pub fn get_body_count() -> u32 {
    with_runner(|r| r.body_count())
}

#[wasm_bindgen]
pub fn get_lines_ptr() -> *const f32 {
    RUNNER.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(std::ptr::null(), |r| r.line_ptr())
    })
}

#[wasm_bindgen]
pub fn get_line_count() -> u32 {
    with_runner(|r| r.line_count())
}

#[wasm_bindgen]
pub fn get_selection_id() -> f32 {
    with_runner(|r| r.selection_id())
}

#[wasm_bindgen]
pub fn get_zoom() -> f64 {
    with_runner(|r| r.zoom())
}
