//! Geometric properties every generated mesh must satisfy

use glam::{Vec2, Vec3};
use polygonal::MeshError;
use polygonal::procedural::{
    Mesh, Topology, generate_cube, generate_floor, generate_quad, generate_skybox,
    generate_sphere, generate_torus, generate_wall,
};

fn assert_indices_in_range(mesh: &Mesh) {
    let count = mesh.vertex_count() as u32;
    assert!(
        mesh.indices.iter().all(|&i| i < count),
        "index out of range for {count} vertices"
    );
}

fn wall_corners() -> [Vec3; 4] {
    [
        Vec3::new(-1.0, 1.0, 0.0),
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
    ]
}

#[test]
fn test_sphere_counts_and_bounds() {
    for (x, y) in [(1, 1), (1, 5), (3, 2), (16, 8), (64, 64)] {
        let mesh = generate_sphere(x, y).unwrap();
        assert_eq!(mesh.vertex_count(), ((x + 1) * (y + 1)) as usize);
        assert_eq!(mesh.index_count(), (2 * y * (x + 1)) as usize);
        assert_eq!(mesh.topology, Topology::TriangleStrip);
        assert_indices_in_range(&mesh);
    }
}

#[test]
fn test_sphere_is_unit_with_normal_equal_position() {
    let mesh = generate_sphere(32, 16).unwrap();
    for vertex in &mesh.vertices {
        assert!((vertex.position.length() - 1.0).abs() < 1e-5);
        assert_eq!(vertex.normal, vertex.position);
    }
}

#[test]
fn test_sphere_uvs_cover_unit_square() {
    let mesh = generate_sphere(8, 4).unwrap();
    assert_eq!(mesh.vertices[0].uv, Vec2::ZERO);
    assert_eq!(mesh.vertices[8].uv, Vec2::new(1.0, 0.0));
    assert!(mesh.vertices.iter().all(|v| (0.0..=1.0).contains(&v.uv.x)
        && (0.0..=1.0).contains(&v.uv.y)));
}

#[test]
fn test_sphere_is_deterministic() {
    let first = generate_sphere(4, 4).unwrap();
    let second = generate_sphere(4, 4).unwrap();
    assert_eq!(first.interleaved(), second.interleaved());
    assert_eq!(first.indices, second.indices);
}

#[test]
fn test_torus_counts_and_bounds() {
    for (r, c) in [(3, 3), (8, 4), (64, 32)] {
        let mesh = generate_torus(0.2, 0.45, r, c).unwrap();
        assert_eq!(mesh.vertex_count(), (2 * (r + 1) * (c + 1)) as usize);
        assert_eq!(mesh.index_count(), (2 * c * (r + 1)) as usize);
        assert_eq!(mesh.topology, Topology::TriangleStrip);
        assert_indices_in_range(&mesh);
    }
}

#[test]
fn test_torus_stays_within_scaled_radii() {
    let (r, c) = (0.2f32, 0.45f32);
    let mesh = generate_torus(r, c, 16, 12).unwrap();
    for vertex in &mesh.vertices {
        let p = vertex.position;
        let planar = (p.x * p.x + p.y * p.y).sqrt();
        assert!(planar <= 2.0 * (c + r) + 1e-5);
        assert!(planar >= 2.0 * (c - r) - 1e-5);
        assert!(p.z.abs() <= 2.0 * r + 1e-5);
    }
}

#[test]
fn test_torus_rejects_zero_minor_radius() {
    let err = generate_torus(0.0, 0.45, 64, 32).unwrap_err();
    assert!(matches!(err, MeshError::InvalidParameter(_)));
}

#[test]
fn test_quad_frame_is_unit_and_orthogonal_to_normal() {
    let uv_sets = [
        [Vec2::new(0.0, 1.0), Vec2::ZERO, Vec2::X, Vec2::ONE],
        [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y],
        [Vec2::new(0.0, 2.0), Vec2::ZERO, Vec2::new(3.0, 0.0), Vec2::new(3.0, 2.0)],
    ];

    for uvs in uv_sets {
        let mesh = generate_quad(wall_corners(), uvs, Vec3::Z).unwrap();
        for vertex in &mesh.vertices {
            assert!((vertex.tangent.length() - 1.0).abs() < 1e-5);
            assert!((vertex.bitangent.length() - 1.0).abs() < 1e-5);
            assert!(vertex.tangent.dot(vertex.normal).abs() < 1e-4);
            assert!(vertex.bitangent.dot(vertex.normal).abs() < 1e-4);
        }
    }
}

#[test]
fn test_axis_aligned_quad_tangent_frame() {
    let mesh = generate_quad(
        wall_corners(),
        [Vec2::new(0.0, 1.0), Vec2::ZERO, Vec2::X, Vec2::ONE],
        Vec3::Z,
    )
    .unwrap();

    // Both triangles: u runs along +X, v along +Y
    for vertex in &mesh.vertices {
        assert!(vertex.tangent.abs_diff_eq(Vec3::X, 1e-5));
        assert!(vertex.bitangent.abs_diff_eq(Vec3::Y, 1e-5));
    }
    assert_eq!(mesh, generate_wall().unwrap());
}

#[test]
fn test_quad_with_identical_uvs_fails() {
    let err = generate_quad(wall_corners(), [Vec2::splat(0.3); 4], Vec3::Z).unwrap_err();
    assert!(matches!(err, MeshError::DegenerateUv { .. }));
}

#[test]
fn test_fixed_geometry_index_bounds() {
    let meshes = [
        generate_cube(0.5).unwrap(),
        generate_floor(25.0, -0.5, 25.0).unwrap(),
        generate_skybox().unwrap(),
        generate_wall().unwrap(),
    ];
    for mesh in &meshes {
        assert_eq!(mesh.topology, Topology::TriangleList);
        assert_eq!(mesh.index_count() % 3, 0);
        assert_indices_in_range(mesh);
        assert_eq!(
            mesh.vertex_bytes().len(),
            mesh.vertex_count() * mesh.layout.stride_bytes()
        );
    }
}
