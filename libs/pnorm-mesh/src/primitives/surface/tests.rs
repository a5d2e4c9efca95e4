//! P-norm surface tests.

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_surface_counts_follow_grid() {
    for segments in [2, 3, 8, 17, 64] {
        let grid = GridDims::from_segments(segments);
        let mesh = pnorm_surface(1.0, Norm::Finite(2.0), segments);
        assert_eq!(mesh.vertex_count(), grid.vertex_count());
        assert_eq!(mesh.triangle_count(), grid.triangle_count());
    }
}

#[test]
fn test_surface_first_quad_triangulation() {
    let mesh = pnorm_surface(1.0, Norm::Finite(2.0), 8);
    // a = 0, b = 9, c = 1, d = 10
    assert_eq!(mesh.triangle(0), [0, 9, 1]);
    assert_eq!(mesh.triangle(1), [9, 10, 1]);
}

#[test]
fn test_surface_poles_are_duplicated_per_column() {
    let radius = 2.5;
    let mesh = pnorm_surface(radius, Norm::Finite(3.0), 8);
    let grid = GridDims::from_segments(8);
    for j in 0..=grid.phi_segments {
        assert_eq!(mesh.vertex(grid.index(0, j)), DVec3::new(0.0, 0.0, radius));
        assert_eq!(
            mesh.vertex(grid.index(grid.theta_segments, j)),
            DVec3::new(0.0, 0.0, -radius)
        );
    }
}

#[test]
fn test_surface_seam_column_matches_first_column() {
    let mesh = pnorm_surface(1.0, Norm::Finite(1.5), 12);
    let grid = GridDims::from_segments(12);
    for i in 0..=grid.theta_segments {
        assert_eq!(
            mesh.vertex(grid.index(i, 0)),
            mesh.vertex(grid.index(i, grid.phi_segments))
        );
    }
}

#[test]
fn test_surface_axis_points_sit_at_radius() {
    // Equator row, quarter turns land on the coordinate axes for every p
    let mesh = pnorm_surface(3.0, Norm::Finite(0.5), 8);
    let grid = GridDims::from_segments(8);
    let equator = grid.theta_segments / 2;
    assert_eq!(mesh.vertex(grid.index(equator, 0)), DVec3::new(3.0, 0.0, 0.0));
    assert_eq!(mesh.vertex(grid.index(equator, 2)), DVec3::new(0.0, 3.0, 0.0));
    assert_eq!(mesh.vertex(grid.index(equator, 4)), DVec3::new(-3.0, 0.0, 0.0));
    assert_eq!(mesh.vertex(grid.index(equator, 6)), DVec3::new(0.0, -3.0, 0.0));
}

#[test]
fn test_surface_vertices_have_target_norm() {
    for p in [0.25, 0.7, 1.0, 2.0, 4.0, 9.5] {
        let norm = Norm::Finite(p);
        let mesh = pnorm_surface(1.75, norm, 24);
        for v in mesh.vertices() {
            assert_relative_eq!(norm.magnitude(*v), 1.75, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_surface_chebyshev_vertices_lie_on_cube() {
    let mesh = pnorm_surface(2.0, Norm::Chebyshev, 16);
    for v in mesh.vertices() {
        assert_relative_eq!(v.abs().max_element(), 2.0, epsilon = 1e-12);
    }
}

#[test]
fn test_surface_normals_are_unit_and_outward() {
    for p in [1.0, 2.0, 6.0] {
        let mesh = pnorm_surface(1.0, Norm::Finite(p), 32);
        let normals = mesh.normals().expect("surface computes normals");
        for (v, n) in mesh.vertices().iter().zip(normals) {
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-9);
            assert!(n.dot(*v) > 0.0, "normal {n} at {v} points inward");
        }
    }
}

#[test]
fn test_surface_pole_normals_point_along_axis() {
    let mesh = pnorm_surface(1.0, Norm::Finite(2.0), 16);
    let normals = mesh.normals().expect("surface computes normals");
    assert_relative_eq!(normals[0].z, 1.0, epsilon = 1e-9);
    assert_relative_eq!(normals[normals.len() - 1].z, -1.0, epsilon = 1e-9);
}

#[test]
fn test_surface_two_segments_is_finite() {
    let mesh = pnorm_surface(1.0, Norm::Finite(2.0), 2);
    assert!(mesh.validate().is_ok());
    let normals = mesh.normals().expect("surface computes normals");
    for n in normals {
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_surface_scale_falls_back_on_zero_norm() {
    assert_eq!(surface_scale(4.0, Norm::Finite(2.0), DVec3::ZERO), 4.0);
    assert_eq!(surface_scale(4.0, Norm::Finite(2.0), DVec3::X), 4.0);
    assert_relative_eq!(
        surface_scale(1.0, Norm::Finite(1.0), DVec3::new(0.6, 0.8, 0.0)),
        1.0 / 1.4,
        epsilon = 1e-12
    );
}
