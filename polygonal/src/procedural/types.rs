//! Procedural mesh types
//!
//! Shared vertex, layout and mesh types returned by every generator.

use glam::{Vec2, Vec3};

/// Primitive topology used to draw the index buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Every three indices form an independent triangle
    TriangleList,
    /// Each index after the first two forms a triangle with the previous two
    TriangleStrip,
}

/// Attribute set carried by a mesh's vertices
///
/// Attributes are always interleaved in the order
/// position, normal, uv, tangent, bitangent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexLayout {
    /// Position only (3 floats) - skybox
    Position,
    /// Position + normal + uv (8 floats)
    PositionNormalUv,
    /// Position + normal + uv + tangent + bitangent (14 floats)
    PositionNormalUvTangent,
}

/// One attribute slot as a renderer binds it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader location
    pub location: u32,
    /// Number of f32 components
    pub components: u32,
    /// Byte offset inside one vertex
    pub offset_bytes: usize,
}

impl VertexLayout {
    /// Vertex stride in floats
    pub const fn stride_floats(self) -> usize {
        match self {
            Self::Position => 3,
            Self::PositionNormalUv => 3 + 3 + 2,
            Self::PositionNormalUvTangent => 3 + 3 + 2 + 3 + 3,
        }
    }

    /// Vertex stride in bytes
    pub const fn stride_bytes(self) -> usize {
        self.stride_floats() * std::mem::size_of::<f32>()
    }

    pub const fn has_normal(self) -> bool {
        !matches!(self, Self::Position)
    }

    pub const fn has_uv(self) -> bool {
        !matches!(self, Self::Position)
    }

    pub const fn has_tangent(self) -> bool {
        matches!(self, Self::PositionNormalUvTangent)
    }

    /// Attribute slots in location order
    pub fn attributes(self) -> Vec<VertexAttribute> {
        let widths: &[u32] = match self {
            Self::Position => &[3],
            Self::PositionNormalUv => &[3, 3, 2],
            Self::PositionNormalUvTangent => &[3, 3, 2, 3, 3],
        };

        let mut offset = 0;
        widths
            .iter()
            .enumerate()
            .map(|(location, &components)| {
                let attribute = VertexAttribute {
                    location: location as u32,
                    components,
                    offset_bytes: offset,
                };
                offset += components as usize * std::mem::size_of::<f32>();
                attribute
            })
            .collect()
    }
}

/// Full-precision vertex
///
/// Attributes the mesh layout does not carry are left at zero and are never emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
    pub tangent: Vec3,
    pub bitangent: Vec3,
}

impl Vertex {
    /// Position-only vertex
    pub fn position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Vertex with position, normal and uv
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            normal,
            uv,
            ..Self::default()
        }
    }

    /// Vertex carrying a full tangent frame
    pub fn with_tangent(
        position: Vec3,
        normal: Vec3,
        uv: Vec2,
        tangent: Vec3,
        bitangent: Vec3,
    ) -> Self {
        Self {
            position,
            normal,
            uv,
            tangent,
            bitangent,
        }
    }
}

/// Generated mesh
///
/// Immutable once returned; every index is below `vertex_count()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub layout: VertexLayout,
    pub topology: Topology,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub(crate) fn with_capacity(
        layout: VertexLayout,
        topology: Topology,
        vertex_count: usize,
        index_count: usize,
    ) -> Self {
        Self {
            layout,
            topology,
            vertices: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Append a vertex, returning its index
    pub(crate) fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Interleaved f32 vertex buffer in layout order
    pub fn interleaved(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.vertices.len() * self.layout.stride_floats());

        for vertex in &self.vertices {
            data.extend_from_slice(&vertex.position.to_array());
            if self.layout.has_normal() {
                data.extend_from_slice(&vertex.normal.to_array());
            }
            if self.layout.has_uv() {
                data.extend_from_slice(&vertex.uv.to_array());
            }
            if self.layout.has_tangent() {
                data.extend_from_slice(&vertex.tangent.to_array());
                data.extend_from_slice(&vertex.bitangent.to_array());
            }
        }

        data
    }

    /// Vertex buffer as raw bytes, ready for upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.interleaved()).to_vec()
    }

    /// Index buffer as raw bytes (u32 elements)
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Triangles described by the index buffer
    ///
    /// Strips are expanded with alternating winding so every triangle keeps the
    /// orientation of the first one; triangles that repeat an index are skipped.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        match self.topology {
            Topology::TriangleList => self
                .indices
                .chunks_exact(3)
                .map(|tri| [tri[0], tri[1], tri[2]])
                .collect(),
            Topology::TriangleStrip => self
                .indices
                .windows(3)
                .enumerate()
                .filter(|(_, w)| w[0] != w[1] && w[1] != w[2] && w[0] != w[2])
                .map(|(i, w)| {
                    if i % 2 == 0 {
                        [w[0], w[1], w[2]]
                    } else {
                        [w[1], w[0], w[2]]
                    }
                })
                .collect(),
        }
    }

    /// Number of non-degenerate triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_mesh(indices: Vec<u32>) -> Mesh {
        Mesh {
            layout: VertexLayout::Position,
            topology: Topology::TriangleStrip,
            vertices: (0..6).map(|i| Vertex::position(Vec3::splat(i as f32))).collect(),
            indices,
        }
    }

    #[test]
    fn test_layout_strides() {
        assert_eq!(VertexLayout::Position.stride_floats(), 3);
        assert_eq!(VertexLayout::PositionNormalUv.stride_floats(), 8);
        assert_eq!(VertexLayout::PositionNormalUvTangent.stride_floats(), 14);
        assert_eq!(VertexLayout::PositionNormalUvTangent.stride_bytes(), 56);
    }

    #[test]
    fn test_attribute_offsets() {
        let attrs = VertexLayout::PositionNormalUvTangent.attributes();
        let offsets: Vec<usize> = attrs.iter().map(|a| a.offset_bytes).collect();
        assert_eq!(offsets, vec![0, 12, 24, 32, 44]);
        assert_eq!(attrs[2].components, 2);
        assert_eq!(attrs[4].location, 4);

        let total: u32 = VertexLayout::PositionNormalUv
            .attributes()
            .iter()
            .map(|a| a.components)
            .sum();
        assert_eq!(total as usize, VertexLayout::PositionNormalUv.stride_floats());
    }

    #[test]
    fn test_interleaved_skips_absent_attributes() {
        let mesh = Mesh {
            layout: VertexLayout::Position,
            topology: Topology::TriangleList,
            vertices: vec![Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, Vec2::ONE)],
            indices: vec![],
        };
        assert_eq!(mesh.interleaved(), vec![1.0, 2.0, 3.0]);
        assert_eq!(mesh.vertex_bytes().len(), 12);
    }

    #[test]
    fn test_strip_expansion_alternates_winding() {
        let mesh = strip_mesh(vec![0, 1, 2, 3]);
        assert_eq!(mesh.triangles(), vec![[0, 1, 2], [2, 1, 3]]);
    }

    #[test]
    fn test_strip_expansion_skips_degenerates() {
        let mesh = strip_mesh(vec![0, 1, 2, 1, 3, 4]);
        // windows: (0,1,2) (1,2,1)x (2,1,3) (1,3,4)
        assert_eq!(mesh.triangles(), vec![[0, 1, 2], [2, 1, 3], [3, 1, 4]]);
        assert_eq!(mesh.triangle_count(), 3);
    }

    #[test]
    fn test_index_bytes_are_four_per_index() {
        let mesh = strip_mesh(vec![1, 2]);
        assert_eq!(mesh.index_bytes().len(), 8);
    }
}
