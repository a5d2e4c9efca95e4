//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use pnorm_mesh::{Mesh, MeshBuffers};
use wasm_bindgen::prelude::*;

/// A handle to mesh buffers that can be read from JavaScript.
///
/// `Vec<f32>` and `Vec<u32>` returns surface in JavaScript as
/// `Float32Array` and `Uint32Array`.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_surface(1.0, 2.0, 64);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.positions(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct MeshHandle {
    buffers: MeshBuffers,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.buffers.vertex_count() as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.buffers.triangle_count() as u32
    }

    /// Returns the vertex positions.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    pub fn positions(&self) -> Vec<f32> {
        self.buffers.positions.clone()
    }

    /// Returns the triangle indices.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.buffers.indices.clone()
    }

    /// Returns the vertex normals.
    ///
    /// Format: [nx, ny, nz, nx, ny, nz, ...]
    /// Length: vertex_count * 3
    pub fn normals(&self) -> Vec<f32> {
        self.buffers.normals.clone()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.buffers.positions.is_empty()
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a Mesh.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            buffers: mesh.to_buffers(),
        }
    }

    /// Borrows the flattened buffers.
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }
}
