//! Flat quad with per-triangle tangent frames (normal/parallax mapping)

use glam::{Vec2, Vec3};
use tracing::debug;

use super::types::{Mesh, Topology, Vertex, VertexLayout};
use crate::error::{MeshError, Result};

/// UV determinants with a smaller magnitude are treated as degenerate
pub const UV_DETERMINANT_EPSILON: f32 = 1e-6;

/// Corner order of the two triangles; both share the 0-2 diagonal
const TRIANGLES: [[usize; 3]; 2] = [[0, 1, 2], [0, 2, 3]];

/// Generate a two-triangle quad with tangent and bitangent vectors
///
/// # Arguments
/// * `corners` - Four corner positions in consistent winding
/// * `uvs` - Texture coordinates matching `corners`
/// * `normal` - Flat normal shared by every vertex
///
/// # Returns
/// Six vertices (corners 0,1,2 then 0,2,3), `TriangleList`,
/// layout `PositionNormalUvTangent`.
///
/// # Tangent Calculation
/// Each triangle solves `E = ΔUV · [T B]ᵀ` for its own tangent and bitangent;
/// the two frames are not averaged across the shared diagonal.
pub fn generate_quad(corners: [Vec3; 4], uvs: [Vec2; 4], normal: Vec3) -> Result<Mesh> {
    if !corners.iter().all(|c| c.is_finite()) || !uvs.iter().all(|uv| uv.is_finite()) {
        return Err(MeshError::invalid("quad corners and uvs must be finite"));
    }
    if !normal.is_finite() {
        return Err(MeshError::invalid("quad normal must be finite"));
    }

    // Solve every triangle before allocating the mesh
    let mut frames = [(Vec3::ZERO, Vec3::ZERO); 2];
    for (frame, tri) in frames.iter_mut().zip(TRIANGLES) {
        *frame = tangent_frame(
            [corners[tri[0]], corners[tri[1]], corners[tri[2]]],
            [uvs[tri[0]], uvs[tri[1]], uvs[tri[2]]],
        )?;
    }

    let mut mesh = Mesh::with_capacity(
        VertexLayout::PositionNormalUvTangent,
        Topology::TriangleList,
        6,
        6,
    );
    for ((tangent, bitangent), tri) in frames.into_iter().zip(TRIANGLES) {
        for corner in tri {
            let index = mesh.push_vertex(Vertex::with_tangent(
                corners[corner],
                normal,
                uvs[corner],
                tangent,
                bitangent,
            ));
            mesh.indices.push(index);
        }
    }

    debug!(vertices = mesh.vertex_count(), "generated tangent quad");
    Ok(mesh)
}

/// Generate the 2×2 parallax wall facing +Z
pub fn generate_wall() -> Result<Mesh> {
    generate_quad(
        [
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ],
        [
            Vec2::new(0.0, 1.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
        ],
        Vec3::Z,
    )
}

/// Tangent and bitangent of one triangle, both normalized
fn tangent_frame(positions: [Vec3; 3], uvs: [Vec2; 3]) -> Result<(Vec3, Vec3)> {
    let edge1 = positions[1] - positions[0];
    let edge2 = positions[2] - positions[0];
    let delta_uv1 = uvs[1] - uvs[0];
    let delta_uv2 = uvs[2] - uvs[0];

    let determinant = delta_uv1.x * delta_uv2.y - delta_uv2.x * delta_uv1.y;
    if determinant.abs() < UV_DETERMINANT_EPSILON {
        return Err(MeshError::DegenerateUv { determinant });
    }
    let f = 1.0 / determinant;

    let tangent = f * (delta_uv2.y * edge1 - delta_uv1.y * edge2);
    let bitangent = f * (-delta_uv2.x * edge1 + delta_uv1.x * edge2);

    match (tangent.try_normalize(), bitangent.try_normalize()) {
        (Some(tangent), Some(bitangent)) => Ok((tangent, bitangent)),
        _ => Err(MeshError::DegenerateGeometry(
            "quad triangle has collinear corners".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_near(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, 1e-5),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_wall_counts() {
        let mesh = generate_wall().unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(mesh.topology, Topology::TriangleList);
        assert_eq!(mesh.interleaved().len(), 6 * 14);
    }

    #[test]
    fn test_wall_tangent_frame() {
        let mesh = generate_wall().unwrap();
        for vertex in &mesh.vertices {
            assert_vec_near(vertex.tangent, Vec3::X);
            assert_vec_near(vertex.bitangent, Vec3::Y);
            assert_eq!(vertex.normal, Vec3::Z);
        }
    }

    #[test]
    fn test_triangle_order_shares_diagonal() {
        let mesh = generate_wall().unwrap();
        let positions: Vec<Vec3> = mesh.vertices.iter().map(|v| v.position).collect();
        assert_eq!(positions[0], positions[3]);
        assert_eq!(positions[2], positions[4]);
        assert_eq!(positions[5], Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotated_uvs_rotate_tangent() {
        // UVs rotated 90 degrees: u increases downwards
        let mesh = generate_quad(
            [
                Vec3::new(-1.0, 1.0, 0.0),
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
            ],
            [
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ],
            Vec3::Z,
        )
        .unwrap();
        assert_vec_near(mesh.vertices[0].tangent, Vec3::NEG_Y);
        assert_vec_near(mesh.vertices[0].bitangent, Vec3::X);
    }

    #[test]
    fn test_identical_uvs_rejected() {
        let err = generate_quad(
            [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y],
            [Vec2::splat(0.5); 4],
            Vec3::Z,
        )
        .unwrap_err();
        assert!(matches!(err, MeshError::DegenerateUv { .. }));
    }

    #[test]
    fn test_collinear_corners_rejected() {
        let err = generate_quad(
            [Vec3::ZERO, Vec3::ZERO, Vec3::ZERO, Vec3::ZERO],
            [Vec2::new(0.0, 1.0), Vec2::ZERO, Vec2::X, Vec2::ONE],
            Vec3::Z,
        )
        .unwrap_err();
        assert!(matches!(err, MeshError::DegenerateGeometry(_)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = generate_quad(
            [Vec3::splat(f32::NAN), Vec3::X, Vec3::ONE, Vec3::Y],
            [Vec2::new(0.0, 1.0), Vec2::ZERO, Vec2::X, Vec2::ONE],
            Vec3::Z,
        )
        .unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter(_)));
    }
}
