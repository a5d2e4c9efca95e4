//! # Cube Primitive
//!
//! The limiting shape of the p-norm ball as p grows: an origin-centered,
//! axis-aligned cube.

use crate::mesh::Mesh;
use glam::DVec3;

/// Creates an origin-centered cube spanning `[-half_extent, half_extent]` on every axis.
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face), counter-clockwise
/// when viewed from outside.
///
/// # Example
///
/// ```rust
/// use pnorm_mesh::primitives::create_cube;
///
/// let mesh = create_cube(2.0);
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cube(half_extent: f64) -> Mesh {
    let mut mesh = Mesh::with_capacity(8, 12);
    let max = DVec3::splat(half_extent);
    let min = -max;

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z)); // 0: left-front-bottom
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z)); // 1: right-front-bottom
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z)); // 2: right-back-bottom
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z)); // 3: left-back-bottom

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z)); // 4: left-front-top
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z)); // 5: right-front-top
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z)); // 6: right-back-top
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z)); // 7: left-back-top

    mesh.add_triangle(v0, v2, v1); // -z
    mesh.add_triangle(v0, v3, v2);
    mesh.add_triangle(v4, v5, v6); // +z
    mesh.add_triangle(v4, v6, v7);
    mesh.add_triangle(v0, v1, v5); // -y
    mesh.add_triangle(v0, v5, v4);
    mesh.add_triangle(v2, v3, v7); // +y
    mesh.add_triangle(v2, v7, v6);
    mesh.add_triangle(v3, v0, v4); // -x
    mesh.add_triangle(v3, v4, v7);
    mesh.add_triangle(v1, v2, v6); // +x
    mesh.add_triangle(v1, v6, v5);

    mesh.compute_normals();
    mesh
}

#[cfg(test)]
mod tests;
