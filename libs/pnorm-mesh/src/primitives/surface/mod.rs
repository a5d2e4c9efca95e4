//! # P-Norm Surface Primitive
//!
//! Samples the implicit surface `|x|^p + |y|^p + |z|^p = R^p` on a
//! latitude/longitude grid. Each unit-sphere direction is rescaled by
//! `R / ‖d‖_p`, which lands it exactly on the surface.

use crate::mesh::Mesh;
use crate::norm::{snap_to_zero, Norm};
use crate::params::GridDims;
use config::constants::approx_zero;
use glam::DVec3;
use std::f64::consts::{PI, TAU};

/// Creates the p-norm surface mesh for an explicit norm.
///
/// Rows run from the north pole (`theta = 0`) to the south pole
/// (`theta = PI`); columns run once around the z axis with the seam column
/// repeated. Pole and seam vertices are emitted per column, never merged.
///
/// # Arguments
///
/// * `radius` - Target norm of every vertex
/// * `norm` - Norm used to rescale the unit-sphere samples
/// * `segments` - Longitude bands; latitude bands are `max(2, segments / 2)`
///
/// # Example
///
/// ```rust
/// use pnorm_mesh::{primitives::pnorm_surface, Norm};
///
/// let mesh = pnorm_surface(1.0, Norm::Finite(2.0), 8);
/// assert_eq!(mesh.vertex_count(), 45);
/// assert_eq!(mesh.triangle_count(), 64);
/// ```
pub fn pnorm_surface(radius: f64, norm: Norm, segments: u32) -> Mesh {
    let grid = GridDims::from_segments(segments);
    let mut mesh = Mesh::with_capacity(grid.vertex_count(), grid.triangle_count());

    for i in 0..=grid.theta_segments {
        let v = i as f64 / grid.theta_segments as f64;
        let theta = v * PI;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for j in 0..=grid.phi_segments {
            let u = j as f64 / grid.phi_segments as f64;
            let phi = u * TAU;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let direction = snap_to_zero(DVec3::new(
                sin_theta * cos_phi,
                sin_theta * sin_phi,
                cos_theta,
            ));
            mesh.add_vertex(direction * surface_scale(radius, norm, direction));
        }
    }

    for i in 0..grid.theta_segments {
        for j in 0..grid.phi_segments {
            let a = grid.index(i, j);
            let b = a + grid.row_stride();
            let c = a + 1;
            let d = b + 1;

            mesh.add_triangle(a, b, c);
            mesh.add_triangle(b, d, c);
        }
    }

    mesh.compute_normals();
    mesh
}

/// Factor that moves `direction` onto the surface of the given radius.
///
/// Falls back to `radius` when the norm is degenerate.
fn surface_scale(radius: f64, norm: Norm, direction: DVec3) -> f64 {
    let magnitude = norm.magnitude(direction);
    if approx_zero(magnitude) {
        radius
    } else {
        radius / magnitude
    }
}

#[cfg(test)]
mod tests;
