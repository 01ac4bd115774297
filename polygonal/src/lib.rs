//! Polygonal - procedural geometry for a small real-time OpenGL scene
//!
//! The crate produces CPU-side vertex and index buffers; uploading them and
//! issuing draw calls is left to the renderer that owns the GL context.
//!
//! - [`procedural`]: stateless mesh generators (tangent quad, UV sphere, torus,
//!   cube, floor, skybox) and OBJ export
//! - [`cache`]: renderer-owned cache keyed by generator parameters
//! - [`scene`]: explicit application state and light/model transforms
//! - [`config`]: `polygonal.toml` parsing
//!
//! # Example
//! ```
//! use polygonal::cache::{MeshCache, MeshKey};
//! use polygonal::procedural::Topology;
//!
//! let mut cache = MeshCache::new();
//! let sphere = cache.get_or_generate(MeshKey::Sphere { x_segments: 16, y_segments: 8 })?;
//! assert_eq!(sphere.topology, Topology::TriangleStrip);
//! assert_eq!(sphere.vertex_count(), 17 * 9);
//! # Ok::<(), polygonal::MeshError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod procedural;
pub mod scene;

pub use error::{MeshError, Result};
