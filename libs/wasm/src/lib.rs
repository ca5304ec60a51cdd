//! WASM-facing entry points for the Möbius strip pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Each exported function has an `*_internal` counterpart
//! that exposes Rust types directly, so native tests avoid a JS host.
//!
//! Nothing is built at load time: the demonstration strip is produced only
//! when `demo_document` is called.
//!
//! ```
//! let strip = mobius_wasm::build_strip_internal(1.0, 0.2, 4).unwrap();
//! assert_eq!(strip.vertex_count(), 16);
//! ```

use config::constants::{
    DEFAULT_FRAME_INTERVAL_MS, DEMO_ANIMATION_FRAMES, DEMO_RADIUS, DEMO_RESOLUTION, DEMO_WIDTH,
};
use mobius_mesh::{MobiusStrip, ParameterSet};
use mobius_view::{AnimationSettings, Animator, Colormap, DisplayDocument, Renderer};
use wasm_bindgen::prelude::*;

mod diagnostics;
mod mesh_handle;

pub use diagnostics::{Diagnostic, Stage};
pub use mesh_handle::StripHandle;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        /// Installs the panic hook and logger when the module is instantiated.
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        /// Installs the logger when the module is instantiated.
        #[wasm_bindgen(start)]
        pub fn initialize() {
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    // A second initialization keeps the logger already installed
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {}

/// Default strip parameters for JavaScript.
///
/// # Examples
/// ```
/// let params = mobius_wasm::default_parameters();
/// assert_eq!(params.resolution(), 100);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Copy)]
pub struct ParametersHandle {
    radius: f64,
    width: f64,
    resolution: u32,
}

#[wasm_bindgen]
impl ParametersHandle {
    /// Midline radius.
    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Strip width.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Samples per axis.
    #[wasm_bindgen(getter)]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }
}

/// Returns the default radius, width and resolution.
#[wasm_bindgen]
pub fn default_parameters() -> ParametersHandle {
    let params = ParameterSet::default();
    ParametersHandle {
        radius: params.radius(),
        width: params.width(),
        resolution: params.resolution() as u32,
    }
}

/// Builds a strip and renders it for display.
///
/// # Errors
/// Returns a JavaScript object `{ stage, parameter, message }` when a
/// parameter is rejected.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const strip = build_strip(1.0, 0.3, 150);
/// // console.log(strip.vertex_count, strip.triangle_count);
/// ```
#[wasm_bindgen]
pub fn build_strip(radius: f64, width: f64, resolution: u32) -> Result<StripHandle, JsValue> {
    build_strip_internal(radius, width, resolution as usize).map_err(|diag| diag.to_js_object())
}

/// Host-only helper behind [`build_strip`].
///
/// # Examples
/// ```
/// assert!(mobius_wasm::build_strip_internal(0.0, 0.3, 10).is_err());
/// ```
pub fn build_strip_internal(
    radius: f64,
    width: f64,
    resolution: usize,
) -> Result<StripHandle, Diagnostic> {
    let strip = MobiusStrip::new(radius, width, resolution)?;
    let scene = Renderer::new(Colormap::Plasma).render(strip.mesh());
    Ok(StripHandle::from_parts(strip.mesh(), scene))
}

/// Builds a strip and returns a JSON animation document.
///
/// # Errors
/// Returns a JavaScript object `{ stage, parameter, message }` when a
/// parameter or animation setting is rejected.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const doc = JSON.parse(animate_strip(1.0, 0.3, 150, 120, 100));
/// // doc.frames.forEach(frame => camera.position.set(...frame.eye));
/// ```
#[wasm_bindgen]
pub fn animate_strip(
    radius: f64,
    width: f64,
    resolution: u32,
    frames: u32,
    interval_ms: u32,
) -> Result<String, JsValue> {
    animate_strip_internal(radius, width, resolution as usize, frames, interval_ms)
        .map_err(|diag| diag.to_js_object())
}

/// Host-only helper behind [`animate_strip`].
pub fn animate_strip_internal(
    radius: f64,
    width: f64,
    resolution: usize,
    frames: u32,
    interval_ms: u32,
) -> Result<String, Diagnostic> {
    let strip = MobiusStrip::new(radius, width, resolution)?;
    let animator = Animator::new(AnimationSettings::new(frames, interval_ms))?;
    let animation = animator.animate(strip.mesh());
    Ok(DisplayDocument::from_animation(animation).to_json()?)
}

/// Builds the demonstration animation (R = 1.0, w = 0.3, n = 150, 120 frames).
///
/// # Errors
/// Returns a JavaScript object if serialization fails.
#[wasm_bindgen]
pub fn demo_document() -> Result<String, JsValue> {
    demo_document_internal().map_err(|diag| diag.to_js_object())
}

/// Host-only helper behind [`demo_document`].
pub fn demo_document_internal() -> Result<String, Diagnostic> {
    log::info!("Building demonstration Möbius strip");
    animate_strip_internal(
        DEMO_RADIUS,
        DEMO_WIDTH,
        DEMO_RESOLUTION,
        DEMO_ANIMATION_FRAMES,
        DEFAULT_FRAME_INTERVAL_MS,
    )
}

#[cfg(test)]
mod tests;
