//! Cube primitive tests.

use super::*;
use approx::assert_relative_eq;

#[test]
fn test_cube_counts() {
    let mesh = create_cube(1.0);
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
}

#[test]
fn test_cube_is_centered() {
    let mesh = create_cube(3.0);
    let (min, max) = mesh.bounding_box();
    assert_eq!(min, DVec3::splat(-3.0));
    assert_eq!(max, DVec3::splat(3.0));
}

#[test]
fn test_cube_vertices_are_sign_corners() {
    let mesh = create_cube(2.0);
    for v in mesh.vertices() {
        assert_eq!(v.abs(), DVec3::splat(2.0));
    }
    // Every octant appears exactly once
    let mut octants: Vec<_> = mesh
        .vertices()
        .iter()
        .map(|v| (v.x > 0.0, v.y > 0.0, v.z > 0.0))
        .collect();
    octants.sort();
    octants.dedup();
    assert_eq!(octants.len(), 8);
}

#[test]
fn test_cube_faces_wind_outward() {
    let mesh = create_cube(1.0);
    for tri in mesh.triangles() {
        let [a, b, c] = tri.map(|i| mesh.vertex(i));
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(normal.dot(centroid) > 0.0, "triangle {tri:?} faces inward");
    }
}

#[test]
fn test_cube_normals_point_into_corner_octant() {
    let mesh = create_cube(1.0);
    let normals = mesh.normals().expect("cube computes normals");
    for (v, n) in mesh.vertices().iter().zip(normals) {
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        // Each corner touches three faces, so every component shares the corner's sign
        assert!(n.x * v.x > 0.0 && n.y * v.y > 0.0 && n.z * v.z > 0.0);
    }
}

#[test]
fn test_cube_validates() {
    assert!(create_cube(0.5).validate().is_ok());
}
