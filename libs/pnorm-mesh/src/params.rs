//! # Surface Parameters
//!
//! The explicit parameter set a caller validates once and hands to the
//! generator, plus the grid dimensions derived from a segment count.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{
    CUBE_EXPONENT_THRESHOLD, DEFAULT_EXPONENT, DEFAULT_RADIUS, DEFAULT_SEGMENTS,
    MIN_TESSELLATION_SEGMENTS, MIN_THETA_SEGMENTS,
};
use serde::Serialize;

/// Validated inputs to [`generate`](crate::generate).
///
/// # Example
///
/// ```rust
/// use pnorm_mesh::SurfaceParams;
///
/// let params = SurfaceParams::new(1.0, 2.0, 8).unwrap();
/// let mesh = params.generate();
/// assert_eq!(mesh.vertex_count(), 45);
///
/// assert!(SurfaceParams::new(1.0, 0.0, 8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceParams {
    radius: f64,
    p: f64,
    segments: u32,
}

impl SurfaceParams {
    /// Builds a parameter set, rejecting values outside the generator's domain.
    ///
    /// Radius must be finite and positive, p must be positive (infinity is
    /// allowed and yields the cube), and segments must be at least 2.
    pub fn new(radius: f64, p: f64, segments: u32) -> Result<Self, MeshError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(MeshError::invalid_parameter(
                "radius",
                radius,
                "must be finite and positive",
            ));
        }
        if p.is_nan() || p <= 0.0 {
            return Err(MeshError::invalid_parameter("p", p, "must be positive"));
        }
        if segments < MIN_TESSELLATION_SEGMENTS {
            return Err(MeshError::invalid_parameter(
                "segments",
                segments as f64,
                "must be at least 2",
            ));
        }
        Ok(Self {
            radius,
            p,
            segments,
        })
    }

    /// Surface radius R.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Norm exponent p.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Tessellation density.
    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// True when generation takes the cube branch.
    pub fn is_cube(&self) -> bool {
        self.p >= CUBE_EXPONENT_THRESHOLD
    }

    /// Grid dimensions the sampler would use for these parameters.
    pub fn grid(&self) -> GridDims {
        GridDims::from_segments(self.segments)
    }

    /// Runs the generator on these parameters.
    pub fn generate(&self) -> Mesh {
        crate::generate(self.radius, self.p, self.segments)
    }
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            p: DEFAULT_EXPONENT,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Latitude/longitude band counts of the sampling grid.
///
/// # Example
///
/// ```rust
/// use pnorm_mesh::GridDims;
///
/// let grid = GridDims::from_segments(8);
/// assert_eq!((grid.theta_segments, grid.phi_segments), (4, 8));
/// assert_eq!(grid.vertex_count(), 45);
/// assert_eq!(grid.triangle_count(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    /// Latitude bands (rows minus one)
    pub theta_segments: u32,
    /// Longitude bands (columns minus one)
    pub phi_segments: u32,
}

impl GridDims {
    /// Derives band counts: `theta = max(2, segments / 2)`, `phi = segments`.
    ///
    /// Segment counts below 2 are raised to 2.
    pub fn from_segments(segments: u32) -> Self {
        let segments = segments.max(MIN_TESSELLATION_SEGMENTS);
        Self {
            theta_segments: (segments / 2).max(MIN_THETA_SEGMENTS),
            phi_segments: segments,
        }
    }

    /// Number of vertices per row.
    #[inline]
    pub fn row_stride(&self) -> u32 {
        self.phi_segments + 1
    }

    /// Flat index of row `i`, column `j`.
    #[inline]
    pub fn index(&self, i: u32, j: u32) -> u32 {
        i * self.row_stride() + j
    }

    /// `(theta + 1) * (phi + 1)`
    pub fn vertex_count(&self) -> usize {
        (self.theta_segments as usize + 1) * (self.phi_segments as usize + 1)
    }

    /// `2 * theta * phi`
    pub fn triangle_count(&self) -> usize {
        2 * self.theta_segments as usize * self.phi_segments as usize
    }
}
