//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, triangles, and per-vertex normals.

use std::collections::HashMap;

use crate::error::MeshError;
use config::constants::DEGENERATE_EPSILON;
use glam::DVec3;
use serde::Serialize;

/// A triangle mesh with vertices, indices, and optional normals.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the rendering boundary for GPU upload.
///
/// # Example
///
/// ```rust
/// use pnorm_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

/// Flattened GPU buffers handed to a rendering host.
///
/// # Example
///
/// ```rust
/// let buffers = pnorm_mesh::generate(1.0, 2.0, 8).to_buffers();
/// assert_eq!(buffers.positions.len(), 45 * 3);
/// assert_eq!(buffers.indices.len(), 64 * 3);
/// assert_eq!(buffers.normals.len(), buffers.positions.len());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshBuffers {
    /// Positions as [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...]
    pub indices: Vec<u32>,
    /// Normals as [nx, ny, nz, ...]; empty when normals were never computed
    pub normals: Vec<f32>,
}

impl MeshBuffers {
    /// Returns the number of vertices described by the position buffer.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles described by the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            normals: None,
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes smooth per-vertex normals from the face list.
    ///
    /// Face normals are area weighted (the unnormalized cross product) and
    /// pooled across vertices that share a bit-identical position, so the
    /// duplicated pole and seam vertices of a latitude/longitude grid receive
    /// the same normal as their neighbours. A vertex whose pooled sum
    /// vanishes falls back to its radial direction.
    pub fn compute_normals(&mut self) {
        let mut slot_of = Vec::with_capacity(self.vertices.len());
        let mut slots: HashMap<[u64; 3], usize> = HashMap::new();
        for v in &self.vertices {
            let next = slots.len();
            let slot = *slots.entry(position_key(*v)).or_insert(next);
            slot_of.push(slot);
        }

        let mut sums = vec![DVec3::ZERO; slots.len()];
        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            for &index in tri {
                sums[slot_of[index as usize]] += normal;
            }
        }

        let normals = self
            .vertices
            .iter()
            .zip(&slot_of)
            .map(|(position, &slot)| {
                let sum = sums[slot];
                let len = sum.length();
                if len > DEGENERATE_EPSILON {
                    sum / len
                } else {
                    radial_fallback(*position)
                }
            })
            .collect();

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are in range
    /// - Every vertex coordinate is finite
    /// - Normals, if present, match the vertex count and are finite
    ///
    /// Zero-area triangles are allowed: the grid sampler emits them at the
    /// poles where a row collapses to a point.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();

        for (index, tri) in self.triangles.iter().enumerate() {
            if tri.iter().any(|&i| i as usize >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {index} references {tri:?} but mesh has {vertex_count} vertices"
                )));
            }
        }

        if let Some(index) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(MeshError::NonFinite {
                kind: "vertex",
                index,
            });
        }

        if let Some(normals) = &self.normals {
            if normals.len() != vertex_count {
                return Err(MeshError::invalid_topology(format!(
                    "{} normals for {vertex_count} vertices",
                    normals.len()
                )));
            }
            if let Some(index) = normals.iter().position(|n| !n.is_finite()) {
                return Err(MeshError::NonFinite {
                    kind: "normal",
                    index,
                });
            }
        }

        Ok(())
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            let mut result = Vec::with_capacity(normals.len() * 3);
            for n in normals {
                result.push(n.x as f32);
                result.push(n.y as f32);
                result.push(n.z as f32);
            }
            result
        })
    }

    /// Flattens the mesh into GPU buffers.
    pub fn to_buffers(&self) -> MeshBuffers {
        MeshBuffers {
            positions: self.vertices_f32(),
            indices: self.indices_u32(),
            normals: self.normals_f32().unwrap_or_default(),
        }
    }
}

/// Hash key for exact position equality. `-0.0` and `0.0` share a key.
fn position_key(v: DVec3) -> [u64; 3] {
    [
        (v.x + 0.0).to_bits(),
        (v.y + 0.0).to_bits(),
        (v.z + 0.0).to_bits(),
    ]
}

fn radial_fallback(position: DVec3) -> DVec3 {
    let len = position.length();
    if len > DEGENERATE_EPSILON {
        position / len
    } else {
        DVec3::Z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.normals().is_none());
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_add_triangle() {
        let mesh = unit_triangle();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_compute_normals_ccw_points_up() {
        let mut mesh = unit_triangle();
        mesh.compute_normals();
        let normals = mesh.normals().unwrap();
        assert_eq!(normals.len(), 3);
        for n in normals {
            assert_relative_eq!(n.z, 1.0);
        }
    }

    #[test]
    fn test_mesh_compute_normals_pools_coincident_vertices() {
        // Two triangles meeting along a fold; vertices 1/3 and 2/4 coincide
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 1.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 1.0, 1.0));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(3, 5, 4);
        mesh.compute_normals();
        let normals = mesh.normals().unwrap();
        assert_eq!(normals[1], normals[3]);
        assert_eq!(normals[2], normals[4]);
        assert_relative_eq!(normals[1].length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mesh_compute_normals_isolated_vertex_uses_radial_direction() {
        let mut mesh = unit_triangle();
        mesh.add_vertex(DVec3::new(0.0, -3.0, 0.0));
        mesh.compute_normals();
        assert_eq!(mesh.normals().unwrap()[3], DVec3::NEG_Y);
    }

    #[test]
    fn test_position_key_merges_signed_zero() {
        assert_eq!(
            position_key(DVec3::new(-0.0, 0.0, 1.0)),
            position_key(DVec3::new(0.0, -0.0, 1.0))
        );
    }

    #[test]
    fn test_mesh_validate_valid() {
        let mut mesh = unit_triangle();
        mesh.compute_normals();
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::InvalidTopology { .. })
        ));
    }

    #[test]
    fn test_mesh_validate_non_finite_vertex() {
        let mut mesh = unit_triangle();
        mesh.add_vertex(DVec3::new(f64::NAN, 0.0, 0.0));
        assert_eq!(
            mesh.validate(),
            Err(MeshError::NonFinite {
                kind: "vertex",
                index: 3
            })
        );
    }

    #[test]
    fn test_mesh_vertices_f32() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        let f32_verts = mesh.vertices_f32();
        assert_eq!(f32_verts, vec![1.0f32, 2.0, 3.0]);
    }

    #[test]
    fn test_mesh_to_buffers_without_normals() {
        let buffers = unit_triangle().to_buffers();
        assert_eq!(buffers.vertex_count(), 3);
        assert_eq!(buffers.triangle_count(), 1);
        assert_eq!(buffers.indices, vec![0, 1, 2]);
        assert!(buffers.normals.is_empty());
    }
}
