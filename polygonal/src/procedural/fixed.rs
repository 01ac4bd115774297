//! Fixed scene geometry (cube, floor, skybox) as triangle lists

use glam::{Vec2, Vec3};
use tracing::debug;

use super::types::{Mesh, Topology, Vertex, VertexLayout};
use crate::error::{MeshError, Result};

/// Outward normal plus in-plane axes with `u × v = normal`
struct Face {
    normal: Vec3,
    u: Vec3,
    v: Vec3,
}

/// +X, -X, +Y, -Y, +Z, -Z
const CUBE_FACES: [Face; 6] = [
    Face { normal: Vec3::X, u: Vec3::NEG_Z, v: Vec3::Y },
    Face { normal: Vec3::NEG_X, u: Vec3::Z, v: Vec3::Y },
    Face { normal: Vec3::Y, u: Vec3::X, v: Vec3::NEG_Z },
    Face { normal: Vec3::NEG_Y, u: Vec3::X, v: Vec3::Z },
    Face { normal: Vec3::Z, u: Vec3::X, v: Vec3::Y },
    Face { normal: Vec3::NEG_Z, u: Vec3::NEG_X, v: Vec3::Y },
];

/// Face-local corners of the two CCW triangles
const FACE_CORNERS: [Vec2; 6] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, 0.0),
];

/// Generate an axis-aligned cube centered at the origin
///
/// # Arguments
/// * `half_extent` - Distance from the center to each face (> 0)
///
/// # Returns
/// 36 vertices (6 faces × 2 triangles), flat outward normals, each face mapped
/// to the full `[0, 1]²` UV square, `TriangleList`, layout `PositionNormalUv`.
pub fn generate_cube(half_extent: f32) -> Result<Mesh> {
    require_positive("cube half_extent", half_extent)?;

    let mut mesh =
        Mesh::with_capacity(VertexLayout::PositionNormalUv, Topology::TriangleList, 36, 36);
    for face in &CUBE_FACES {
        for corner in FACE_CORNERS {
            let position = face_point(face, corner, half_extent);
            let index = mesh.push_vertex(Vertex::new(position, face.normal, corner));
            mesh.indices.push(index);
        }
    }

    debug!(half_extent, "generated cube");
    Ok(mesh)
}

/// Generate a square floor on the plane `y = height`
///
/// # Arguments
/// * `half_extent` - Half the side length (> 0)
/// * `height` - Y coordinate of the plane
/// * `uv_repeat` - Texture repetitions across the floor (> 0)
///
/// # Returns
/// 6 vertices, normal +Y, UVs spanning `[0, uv_repeat]²`, `TriangleList`,
/// layout `PositionNormalUv`.
pub fn generate_floor(half_extent: f32, height: f32, uv_repeat: f32) -> Result<Mesh> {
    require_positive("floor half_extent", half_extent)?;
    require_positive("floor uv_repeat", uv_repeat)?;
    if !height.is_finite() {
        return Err(MeshError::invalid(format!("floor height must be finite, got {height}")));
    }

    let face = Face { normal: Vec3::Y, u: Vec3::X, v: Vec3::NEG_Z };
    let offset = Vec3::new(0.0, height - half_extent, 0.0);

    let mut mesh =
        Mesh::with_capacity(VertexLayout::PositionNormalUv, Topology::TriangleList, 6, 6);
    for corner in FACE_CORNERS {
        let position = face_point(&face, corner, half_extent) + offset;
        let index = mesh.push_vertex(Vertex::new(position, face.normal, corner * uv_repeat));
        mesh.indices.push(index);
    }

    debug!(half_extent, height, uv_repeat, "generated floor");
    Ok(mesh)
}

/// Generate the skybox: a position-only ±1 cube wound to face inwards
pub fn generate_skybox() -> Result<Mesh> {
    let mut mesh = Mesh::with_capacity(VertexLayout::Position, Topology::TriangleList, 36, 36);
    for face in &CUBE_FACES {
        for tri in FACE_CORNERS.chunks_exact(3) {
            for &corner in tri.iter().rev() {
                let index = mesh.push_vertex(Vertex::position(face_point(face, corner, 1.0)));
                mesh.indices.push(index);
            }
        }
    }

    debug!("generated skybox");
    Ok(mesh)
}

fn face_point(face: &Face, corner: Vec2, half_extent: f32) -> Vec3 {
    let local = corner * 2.0 - Vec2::ONE;
    (face.normal + local.x * face.u + local.y * face.v) * half_extent
}

fn require_positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid(format!("{name} must be > 0.0, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face_normal(mesh: &Mesh, tri: [u32; 3]) -> Vec3 {
        let [a, b, c] = tri.map(|i| mesh.vertices[i as usize].position);
        (b - a).cross(c - a).normalize()
    }

    #[test]
    fn test_cube_counts() {
        let mesh = generate_cube(0.5).unwrap();
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.interleaved().len(), 36 * 8);
    }

    #[test]
    fn test_cube_winding_matches_normals() {
        let mesh = generate_cube(0.5).unwrap();
        for tri in mesh.triangles() {
            let normal = mesh.vertices[tri[0] as usize].normal;
            assert!(face_normal(&mesh, tri).abs_diff_eq(normal, 1e-5));
        }
    }

    #[test]
    fn test_cube_extent() {
        let mesh = generate_cube(2.0).unwrap();
        for vertex in &mesh.vertices {
            assert!(vertex.position.abs().abs_diff_eq(Vec3::splat(2.0), 1e-6));
            assert!(vertex.position.dot(vertex.normal) > 0.0);
        }
    }

    #[test]
    fn test_floor_plane_and_uvs() {
        let mesh = generate_floor(25.0, -0.5, 25.0).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        for vertex in &mesh.vertices {
            assert!((vertex.position.y + 0.5).abs() < 1e-6);
            assert_eq!(vertex.position.x.abs(), 25.0);
            assert!(vertex.uv.x == 0.0 || vertex.uv.x == 25.0);
        }
        for tri in mesh.triangles() {
            assert!(face_normal(&mesh, tri).abs_diff_eq(Vec3::Y, 1e-5));
        }
    }

    #[test]
    fn test_skybox_faces_inward() {
        let mesh = generate_skybox().unwrap();
        assert_eq!(mesh.layout, VertexLayout::Position);
        assert_eq!(mesh.interleaved().len(), 36 * 3);
        for tri in mesh.triangles() {
            let centroid = tri
                .iter()
                .map(|&i| mesh.vertices[i as usize].position)
                .sum::<Vec3>()
                / 3.0;
            assert!(face_normal(&mesh, tri).dot(centroid) < 0.0);
        }
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        assert!(matches!(generate_cube(0.0), Err(MeshError::InvalidParameter(_))));
        assert!(matches!(generate_floor(-1.0, 0.0, 1.0), Err(MeshError::InvalidParameter(_))));
        assert!(matches!(generate_floor(1.0, 0.0, 0.0), Err(MeshError::InvalidParameter(_))));
        assert!(matches!(
            generate_floor(1.0, f32::INFINITY, 1.0),
            Err(MeshError::InvalidParameter(_))
        ));
    }
}
