//! Procedural mesh generation
//!
//! Pure functions from geometric parameters to CPU-side meshes. Every generator
//! validates its input before allocating and returns a fresh [`Mesh`]; calling
//! one twice with the same parameters yields identical buffers.
//!
//! - [`generate_quad`] / [`generate_wall`]: flat quad with tangent frames
//! - [`generate_sphere`]: unit UV sphere, one triangle strip
//! - [`generate_torus`]: torus, one triangle strip
//! - [`generate_cube`], [`generate_floor`], [`generate_skybox`]: fixed scene geometry

mod export;
mod fixed;
mod parametric;
mod strip;
mod tangent_quad;
mod types;

pub use export::{write_obj, write_obj_to};
pub use fixed::{generate_cube, generate_floor, generate_skybox};
pub use parametric::{generate_sphere, generate_torus};
pub use strip::strip_indices;
pub use tangent_quad::{UV_DETERMINANT_EPSILON, generate_quad, generate_wall};
pub use types::{Mesh, Topology, Vertex, VertexAttribute, VertexLayout};
