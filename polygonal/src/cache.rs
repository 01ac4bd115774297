//! Renderer-owned mesh cache
//!
//! Generators are stateless; the renderer keeps one of these to build each
//! distinct parameter set once and reuse the result for every draw.

use glam::{Vec2, Vec3};
use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::error::Result;
use crate::procedural::{
    Mesh, generate_cube, generate_floor, generate_quad, generate_skybox, generate_sphere,
    generate_torus, generate_wall,
};

/// Parameter tuple identifying one generated mesh
///
/// Float parameters are stored as their IEEE-754 bit patterns so keys are
/// `Eq + Hash`; build float-carrying keys with the constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKey {
    Sphere {
        x_segments: u32,
        y_segments: u32,
    },
    Torus {
        minor_radius: u32,
        major_radius: u32,
        ring_segments: u32,
        cross_segments: u32,
    },
    Quad {
        corners: [[u32; 3]; 4],
        uvs: [[u32; 2]; 4],
        normal: [u32; 3],
    },
    Wall,
    Cube {
        half_extent: u32,
    },
    Floor {
        half_extent: u32,
        height: u32,
        uv_repeat: u32,
    },
    Skybox,
}

impl MeshKey {
    pub fn torus(
        minor_radius: f32,
        major_radius: f32,
        ring_segments: u32,
        cross_segments: u32,
    ) -> Self {
        Self::Torus {
            minor_radius: minor_radius.to_bits(),
            major_radius: major_radius.to_bits(),
            ring_segments,
            cross_segments,
        }
    }

    pub fn quad(corners: [Vec3; 4], uvs: [Vec2; 4], normal: Vec3) -> Self {
        Self::Quad {
            corners: corners.map(|c| c.to_array().map(f32::to_bits)),
            uvs: uvs.map(|uv| uv.to_array().map(f32::to_bits)),
            normal: normal.to_array().map(f32::to_bits),
        }
    }

    pub fn cube(half_extent: f32) -> Self {
        Self::Cube {
            half_extent: half_extent.to_bits(),
        }
    }

    pub fn floor(half_extent: f32, height: f32, uv_repeat: f32) -> Self {
        Self::Floor {
            half_extent: half_extent.to_bits(),
            height: height.to_bits(),
            uv_repeat: uv_repeat.to_bits(),
        }
    }

    /// Run the generator this key describes
    pub fn generate(&self) -> Result<Mesh> {
        match *self {
            Self::Sphere {
                x_segments,
                y_segments,
            } => generate_sphere(x_segments, y_segments),
            Self::Torus {
                minor_radius,
                major_radius,
                ring_segments,
                cross_segments,
            } => generate_torus(
                f32::from_bits(minor_radius),
                f32::from_bits(major_radius),
                ring_segments,
                cross_segments,
            ),
            Self::Quad {
                corners,
                uvs,
                normal,
            } => generate_quad(
                corners.map(|c| Vec3::from_array(c.map(f32::from_bits))),
                uvs.map(|uv| Vec2::from_array(uv.map(f32::from_bits))),
                Vec3::from_array(normal.map(f32::from_bits)),
            ),
            Self::Wall => generate_wall(),
            Self::Cube { half_extent } => generate_cube(f32::from_bits(half_extent)),
            Self::Floor {
                half_extent,
                height,
                uv_repeat,
            } => generate_floor(
                f32::from_bits(half_extent),
                f32::from_bits(height),
                f32::from_bits(uv_repeat),
            ),
            Self::Skybox => generate_skybox(),
        }
    }
}

/// Cache of generated meshes keyed by their parameters
#[derive(Default)]
pub struct MeshCache {
    meshes: HashMap<MeshKey, Mesh>,
}

impl MeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached mesh for `key`, generating it on first request
    ///
    /// Failed generations are reported and leave the cache untouched.
    pub fn get_or_generate(&mut self, key: MeshKey) -> Result<&Mesh> {
        if self.meshes.contains_key(&key) {
            trace!(?key, "mesh cache hit");
        } else {
            let mesh = key.generate()?;
            debug!(
                ?key,
                vertices = mesh.vertex_count(),
                indices = mesh.index_count(),
                "mesh cache miss, generated"
            );
            self.meshes.insert(key, mesh);
        }
        Ok(&self.meshes[&key])
    }

    pub fn get(&self, key: &MeshKey) -> Option<&Mesh> {
        self.meshes.get(key)
    }

    pub fn contains(&self, key: &MeshKey) -> bool {
        self.meshes.contains_key(key)
    }

    pub fn remove(&mut self, key: &MeshKey) -> Option<Mesh> {
        self.meshes.remove(key)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn clear(&mut self) {
        self.meshes.clear();
    }
}
