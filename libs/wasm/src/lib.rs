//! WASM-facing entry points for the p-norm surface explorer.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the internal helper
//! `generate_surface_internal` and with [`ViewerState`] to avoid depending on
//! a JS host.
//!
//! ```
//! let mesh = pnorm_wasm::generate_surface_internal(1.0, 2.0, 8).unwrap();
//! assert_eq!(mesh.vertex_count(), 45);
//! ```

use config::constants::{
    ControlRanges, DEFAULT_COLOR, DEFAULT_EXPONENT, DEFAULT_RADIUS, DEFAULT_SEGMENTS,
};
use pnorm_mesh::{MeshError, SurfaceParams};
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod mesh_handle;
mod viewer;

pub use mesh_handle::MeshHandle;
pub use viewer::{ControlValues, Material, Update, Viewer, ViewerError, ViewerState};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "pnorm_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the startup exponent.
#[wasm_bindgen]
pub fn default_exponent() -> f64 {
    DEFAULT_EXPONENT
}

/// Returns the startup radius.
#[wasm_bindgen]
pub fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

/// Returns the startup segment count.
///
/// # Examples
/// ```
/// let segments = pnorm_wasm::default_segments();
/// assert!(segments >= 8);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    DEFAULT_SEGMENTS
}

/// Returns the surface color as `[r, g, b, a]`.
#[wasm_bindgen]
pub fn default_color() -> Vec<f32> {
    DEFAULT_COLOR.to_vec()
}

#[derive(Serialize)]
struct SliderRange<T> {
    min: T,
    max: T,
}

#[derive(Serialize)]
struct SliderRanges {
    p: SliderRange<f64>,
    radius: SliderRange<f64>,
    segments: SliderRange<u32>,
}

/// Returns the slider bounds as a JSON object so the host can build its GUI.
///
/// # Examples
/// ```
/// let json = pnorm_wasm::control_ranges_json();
/// assert!(json.contains("\"segments\":{\"min\":8,\"max\":128}"));
/// ```
#[wasm_bindgen]
pub fn control_ranges_json() -> String {
    let ranges = ControlRanges::default();
    let sliders = SliderRanges {
        p: SliderRange {
            min: ranges.exponent.0,
            max: ranges.exponent.1,
        },
        radius: SliderRange {
            min: ranges.radius.0,
            max: ranges.radius.1,
        },
        segments: SliderRange {
            min: ranges.segments.0,
            max: ranges.segments.1,
        },
    };
    serde_json::to_string(&sliders).unwrap_or_default()
}

/// Generates a p-norm surface mesh.
///
/// This is the stateless entry point; hosts that track control changes
/// should use [`Viewer`] instead.
///
/// # Errors
/// Returns a JavaScript error when the parameters are outside the domain.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = generate_surface(1.0, 2.0, 64);
/// // console.log(mesh.vertex_count, mesh.triangle_count);
/// ```
#[wasm_bindgen]
pub fn generate_surface(radius: f64, p: f64, segments: u32) -> Result<MeshHandle, JsError> {
    Ok(generate_surface_internal(radius, p, segments)?)
}

/// Host-only helper that validates parameters and generates the mesh.
///
/// # Examples
/// ```
/// assert!(pnorm_wasm::generate_surface_internal(-1.0, 2.0, 8).is_err());
/// ```
pub fn generate_surface_internal(
    radius: f64,
    p: f64,
    segments: u32,
) -> Result<MeshHandle, MeshError> {
    let params = SurfaceParams::new(radius, p, segments)?;
    Ok(MeshHandle::from_mesh(&params.generate()))
}
