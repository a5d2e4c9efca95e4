//! # P-Norm Mesh
//!
//! Triangle mesh generation for the generalized p-norm ball
//! `|x|^p + |y|^p + |z|^p = R^p`.
//!
//! ## Architecture
//!
//! ```text
//! (radius, p, segments) → generate() → Mesh (vertices, triangles, normals)
//!                                        ↓
//!                                   MeshBuffers (f32/u32 for the GPU)
//! ```
//!
//! ## Algorithms
//!
//! - **p < 10**: latitude/longitude sampling of the unit sphere, each sample
//!   rescaled by `R / ‖d‖_p` onto the surface
//! - **p >= 10**: the limiting axis-aligned cube of edge `2R`
//!
//! Generation is a pure function: no caching, no shared state, every call
//! returns a fresh mesh owned by the caller.
//!
//! ## Usage
//!
//! ```rust
//! let mesh = pnorm_mesh::generate(1.0, 2.0, 8);
//! assert_eq!(mesh.vertex_count(), 45);
//! assert_eq!(mesh.triangle_count(), 64);
//! ```

pub mod error;
pub mod mesh;
pub mod norm;
pub mod params;
pub mod primitives;

pub use error::MeshError;
pub use mesh::{Mesh, MeshBuffers};
pub use norm::Norm;
pub use params::{GridDims, SurfaceParams};

use config::constants::CUBE_EXPONENT_THRESHOLD;
use glam::DVec3;

/// Generates the p-norm ball surface of the given radius.
///
/// Does not validate its inputs: callers are expected to constrain
/// `radius > 0`, `p > 0` and `segments >= 2` upstream, for example through
/// [`SurfaceParams::new`]. Segment counts below 2 are raised to 2.
///
/// # Arguments
///
/// * `radius` - Target p-norm of every vertex
/// * `p` - Norm exponent; `p >= 10` yields the cube
/// * `segments` - Longitude bands (latitude bands are `max(2, segments / 2)`)
///
/// # Example
///
/// ```rust
/// let cube = pnorm_mesh::generate(2.0, 10.0, 64);
/// assert_eq!(cube.vertex_count(), 8);
/// ```
pub fn generate(radius: f64, p: f64, segments: u32) -> Mesh {
    if p >= CUBE_EXPONENT_THRESHOLD {
        tracing::trace!(radius, p, "exponent at cube threshold, emitting cube");
        return primitives::create_cube(radius);
    }

    let mesh = primitives::pnorm_surface(radius, Norm::Finite(p), segments);
    tracing::debug!(
        radius,
        p,
        segments,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated p-norm surface"
    );
    mesh
}

/// Largest absolute difference between a vertex norm and `radius`.
///
/// Returns `0.0` for an empty mesh.
///
/// # Example
///
/// ```rust
/// use pnorm_mesh::{generate, norm_deviation, Norm};
///
/// let mesh = generate(2.0, 3.0, 32);
/// assert!(norm_deviation(&mesh, Norm::Finite(3.0), 2.0) < 1e-9);
/// ```
pub fn norm_deviation(mesh: &Mesh, norm: Norm, radius: f64) -> f64 {
    mesh.vertices()
        .iter()
        .map(|v: &DVec3| (norm.magnitude(*v) - radius).abs())
        .fold(0.0, f64::max)
}
