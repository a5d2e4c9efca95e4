//! # Viewer State
//!
//! The collaborator-side state of the explorer: current surface parameters,
//! material toggles, and the single mesh currently on display.
//!
//! A control change that touches `p`, `radius` or `segments` replaces the
//! mesh; a change that only touches `wireframe` or `opacity` updates the
//! material and leaves the mesh alone.

use crate::mesh_handle::MeshHandle;
use config::constants::{
    DEFAULT_EXPONENT, DEFAULT_OPACITY, DEFAULT_RADIUS, DEFAULT_SEGMENTS, DEFAULT_WIREFRAME,
};
use pnorm_mesh::{Mesh, MeshError, SurfaceParams};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors raised while applying control values.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Surface parameters failed validation
    #[error(transparent)]
    Surface(#[from] MeshError),

    /// Opacity was NaN
    #[error("Invalid opacity: {0}")]
    InvalidOpacity(f32),

    /// Control values could not be decoded
    #[error("Invalid control JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The full tuple a parameter source supplies on every interaction.
///
/// # Example
///
/// ```rust
/// use pnorm_wasm::ControlValues;
///
/// let values: ControlValues = serde_json::from_str(
///     r#"{"p": 3.0, "radius": 1.5, "segments": 32, "wireframe": true, "opacity": 0.5}"#,
/// ).unwrap();
/// assert!(values.wireframe);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlValues {
    /// Norm exponent
    pub p: f64,
    /// Surface radius
    pub radius: f64,
    /// Tessellation density
    pub segments: u32,
    /// Draw edges only
    pub wireframe: bool,
    /// Material opacity in `[0, 1]`
    pub opacity: f32,
}

impl Default for ControlValues {
    fn default() -> Self {
        Self {
            p: DEFAULT_EXPONENT,
            radius: DEFAULT_RADIUS,
            segments: DEFAULT_SEGMENTS,
            wireframe: DEFAULT_WIREFRAME,
            opacity: DEFAULT_OPACITY,
        }
    }
}

/// Display toggles forwarded to the rendering host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    /// Draw edges only
    pub wireframe: bool,
    /// Opacity clamped to `[0, 1]`
    pub opacity: f32,
    /// True when blending is needed (`opacity < 1`)
    pub transparent: bool,
}

impl Material {
    /// Builds a material, clamping opacity into `[0, 1]`.
    pub fn new(wireframe: bool, opacity: f32) -> Result<Self, ViewerError> {
        if opacity.is_nan() {
            return Err(ViewerError::InvalidOpacity(opacity));
        }
        let opacity = opacity.clamp(0.0, 1.0);
        Ok(Self {
            wireframe,
            opacity,
            transparent: opacity < 1.0,
        })
    }
}

/// What a control change did to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Update {
    /// Geometry parameters changed and a new mesh replaced the old one
    Regenerated,
    /// Only the material changed
    MaterialOnly,
    /// Nothing changed
    Unchanged,
}

impl Update {
    /// Stable string form handed to JavaScript.
    pub fn as_str(&self) -> &'static str {
        match self {
            Update::Regenerated => "regenerated",
            Update::MaterialOnly => "material_only",
            Update::Unchanged => "unchanged",
        }
    }
}

/// Owned scene state: parameters, material, and the current mesh.
///
/// # Example
///
/// ```rust
/// use pnorm_wasm::{ControlValues, Update, ViewerState};
///
/// let mut state = ViewerState::default();
/// let update = state
///     .apply(ControlValues { opacity: 0.4, ..ControlValues::default() })
///     .unwrap();
/// assert_eq!(update, Update::MaterialOnly);
/// ```
#[derive(Debug, Clone)]
pub struct ViewerState {
    params: SurfaceParams,
    material: Material,
    mesh: Mesh,
    generation: u32,
}

impl ViewerState {
    /// Validates `values` and builds the initial mesh.
    pub fn new(values: ControlValues) -> Result<Self, ViewerError> {
        let params = SurfaceParams::new(values.radius, values.p, values.segments)?;
        let material = Material::new(values.wireframe, values.opacity)?;
        Ok(Self {
            params,
            material,
            mesh: params.generate(),
            generation: 1,
        })
    }

    /// Applies a control change.
    ///
    /// Invalid values leave the state untouched.
    pub fn apply(&mut self, values: ControlValues) -> Result<Update, ViewerError> {
        let params = SurfaceParams::new(values.radius, values.p, values.segments)?;
        let material = Material::new(values.wireframe, values.opacity)?;

        if params != self.params {
            // Assignment drops the previous mesh
            self.mesh = params.generate();
            self.params = params;
            self.material = material;
            self.generation += 1;
            tracing::info!(
                p = params.p(),
                radius = params.radius(),
                segments = params.segments(),
                generation = self.generation,
                "surface regenerated"
            );
            return Ok(Update::Regenerated);
        }

        if material != self.material {
            self.material = material;
            tracing::debug!(?material, "material updated");
            return Ok(Update::MaterialOnly);
        }

        Ok(Update::Unchanged)
    }

    /// Current control values, with opacity as clamped.
    pub fn controls(&self) -> ControlValues {
        ControlValues {
            p: self.params.p(),
            radius: self.params.radius(),
            segments: self.params.segments(),
            wireframe: self.material.wireframe,
            opacity: self.material.opacity,
        }
    }

    /// Current surface parameters.
    pub fn params(&self) -> SurfaceParams {
        self.params
    }

    /// Current material.
    pub fn material(&self) -> Material {
        self.material
    }

    /// The mesh on display.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Number of meshes generated so far, including the initial one.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        let params = SurfaceParams::default();
        Self {
            params,
            material: Material {
                wireframe: DEFAULT_WIREFRAME,
                opacity: DEFAULT_OPACITY,
                transparent: DEFAULT_OPACITY < 1.0,
            },
            mesh: params.generate(),
            generation: 1,
        }
    }
}

/// JavaScript handle around [`ViewerState`].
///
/// # Example (JavaScript)
///
/// ```javascript
/// const viewer = new Viewer();
/// gui.onChange(() => {
///   const update = viewer.update(params.p, params.radius, params.segments,
///                                params.wireframe, params.opacity);
///   if (update === "regenerated") {
///     surface.geometry.dispose();
///     surface.geometry = toGeometry(viewer.mesh());
///   }
///   Object.assign(surface.material, JSON.parse(viewer.material_json()));
/// });
/// ```
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct Viewer {
    state: ViewerState,
}

#[wasm_bindgen]
impl Viewer {
    /// Creates a viewer showing the default surface.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Viewer {
        Viewer::default()
    }

    /// Applies all control values; returns `"regenerated"`, `"material_only"` or `"unchanged"`.
    pub fn update(
        &mut self,
        p: f64,
        radius: f64,
        segments: u32,
        wireframe: bool,
        opacity: f32,
    ) -> Result<String, JsError> {
        let values = ControlValues {
            p,
            radius,
            segments,
            wireframe,
            opacity,
        };
        Ok(self.state.apply(values)?.as_str().to_string())
    }

    /// Applies control values encoded as a JSON object.
    pub fn update_json(&mut self, json: &str) -> Result<String, JsError> {
        Ok(self.apply_json(json)?.as_str().to_string())
    }

    /// Returns buffers of the mesh on display.
    pub fn mesh(&self) -> MeshHandle {
        MeshHandle::from_mesh(self.state.mesh())
    }

    /// Returns the material as a JSON object.
    pub fn material_json(&self) -> String {
        // Serializing a struct of plain scalars cannot fail
        serde_json::to_string(&self.state.material()).unwrap_or_default()
    }

    /// Returns the current control values as a JSON object.
    pub fn controls_json(&self) -> String {
        serde_json::to_string(&self.state.controls()).unwrap_or_default()
    }

    /// Number of meshes generated so far.
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u32 {
        self.state.generation()
    }
}

impl Viewer {
    /// Host-side JSON update returning Rust errors.
    pub fn apply_json(&mut self, json: &str) -> Result<Update, ViewerError> {
        let values: ControlValues = serde_json::from_str(json)?;
        self.state.apply(values)
    }

    /// Borrows the underlying state.
    pub fn state(&self) -> &ViewerState {
        &self.state
    }
}
