//! Mesh statistics printed by the CLI.

use std::fmt;

use pnorm_mesh::{norm_deviation, Norm, SurfaceParams};
use serde::Serialize;

/// Summary of one generated surface.
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceReport {
    pub params: SurfaceParams,
    pub cube: bool,
    pub vertices: usize,
    pub triangles: usize,
    pub bounds_min: [f64; 3],
    pub bounds_max: [f64; 3],
    /// Largest |‖v‖ - R| under the norm the mesh approximates
    pub norm_deviation: f64,
    pub all_finite: bool,
}

impl SurfaceReport {
    /// Generates the surface for `params` and measures it.
    pub fn measure(params: SurfaceParams) -> Self {
        let mesh = params.generate();
        let cube = params.is_cube();
        let norm = if cube {
            Norm::Chebyshev
        } else {
            Norm::Finite(params.p())
        };
        let (min, max) = mesh.bounding_box();

        Self {
            params,
            cube,
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            bounds_min: min.to_array(),
            bounds_max: max.to_array(),
            norm_deviation: norm_deviation(&mesh, norm, params.radius()),
            all_finite: mesh.validate().is_ok(),
        }
    }
}

impl fmt::Display for SurfaceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "p = {}, radius = {}, segments = {}",
            self.params.p(),
            self.params.radius(),
            self.params.segments()
        )?;
        if self.cube {
            writeln!(f, "  shape:     cube (p >= 10)")?;
        } else {
            let grid = self.params.grid();
            writeln!(
                f,
                "  shape:     grid {} x {} bands",
                grid.theta_segments, grid.phi_segments
            )?;
        }
        writeln!(f, "  vertices:  {}", self.vertices)?;
        writeln!(f, "  triangles: {}", self.triangles)?;
        writeln!(
            f,
            "  bounds:    ({:.4}, {:.4}, {:.4}) .. ({:.4}, {:.4}, {:.4})",
            self.bounds_min[0],
            self.bounds_min[1],
            self.bounds_min[2],
            self.bounds_max[0],
            self.bounds_max[1],
            self.bounds_max[2]
        )?;
        writeln!(f, "  deviation: {:.3e}", self.norm_deviation)?;
        write!(f, "  finite:    {}", self.all_finite)
    }
}
