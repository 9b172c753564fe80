// Host-side tests for the geometry template library.

use shape_field::core::geometry::*;

#[test]
fn sixteen_templates_in_fixed_order() {
    let t = templates();
    assert_eq!(t.len(), TEMPLATE_COUNT);
    assert_eq!(t[0].name, "box");
    assert_eq!(t[6].name, "icosahedron");
    assert_eq!(t[15].name, "torus_knot");
}

#[test]
fn every_index_addresses_a_vertex() {
    for t in templates() {
        assert!(t.mesh.vertex_count() > 0, "{} has no vertices", t.name);
        assert!(t.mesh.triangle_count() > 0, "{} has no triangles", t.name);
        assert_eq!(t.mesh.indices.len() % 3, 0, "{} is not a triangle list", t.name);
        let n = t.mesh.vertex_count() as u32;
        assert!(
            t.mesh.indices.iter().all(|i| *i < n),
            "{} indexes past its vertices",
            t.name
        );
    }
}

#[test]
fn positions_are_finite() {
    for t in templates() {
        assert!(
            t.mesh.positions.iter().flatten().all(|c| c.is_finite()),
            "{} has non-finite positions",
            t.name
        );
    }
}

#[test]
fn platonic_solids_have_expected_faces() {
    assert_eq!(tetrahedron(50.0).triangle_count(), 4);
    assert_eq!(octahedron(50.0).triangle_count(), 8);
    assert_eq!(icosahedron(50.0).triangle_count(), 20);
    // 12 pentagons, 3 triangles each
    assert_eq!(dodecahedron(50.0).triangle_count(), 36);
    assert_eq!(box_mesh(50.0, 50.0, 50.0).triangle_count(), 12);
}

#[test]
fn polyhedra_vertices_lie_on_their_radius() {
    for mesh in [
        tetrahedron(50.0),
        octahedron(50.0),
        icosahedron(50.0),
        dodecahedron(50.0),
    ] {
        for p in &mesh.positions {
            let r = glam::Vec3::from(*p).length();
            assert!((r - 50.0).abs() < 1e-3, "vertex radius {r}");
        }
    }
}

#[test]
fn flat_templates_stay_in_the_xy_plane() {
    for mesh in [circle(3.0, 8), plane(20.0, 20.0), ring(40.0, 60.0, 3)] {
        assert!(mesh.positions.iter().all(|p| p[2] == 0.0));
    }
    assert!((circle(3.0, 8).bounding_radius() - 3.0).abs() < 1e-5);
    assert!((ring(40.0, 60.0, 3).bounding_radius() - 60.0).abs() < 1e-3);
}

#[test]
fn segment_counts_drive_triangle_counts() {
    assert_eq!(circle(1.0, 8).triangle_count(), 8);
    assert_eq!(ring(40.0, 1.0, 8).triangle_count(), 16);
    assert_eq!(plane(20.0, 20.0).triangle_count(), 2);
    // side quads plus both caps
    assert_eq!(cylinder(1.0, 1.0, 1.0, 8).triangle_count(), 16 + 16);
    // a cone drops the top cap
    assert_eq!(cylinder(0.0, 1.0, 1.0, 8).triangle_count(), 16 + 8);
    assert_eq!(torus(50.0, 0.4, 8, 6, std::f32::consts::TAU).triangle_count(), 96);
    assert_eq!(torus_knot(50.0, 0.4, 64, 8, 2.0, 3.0).triangle_count(), 1024);
}

#[test]
fn full_sphere_skips_degenerate_pole_triangles() {
    let pi = std::f32::consts::PI;
    let tau = std::f32::consts::TAU;
    // 6 rows of 8: poles contribute one triangle per cell, the rest two
    assert_eq!(sphere(1.0, 8, 6, 0.0, tau, 0.0, pi).triangle_count(), 80);
    assert_eq!(sphere(50.0, 3, 2, 0.0, tau, 1.0, tau).triangle_count(), 9);
}
