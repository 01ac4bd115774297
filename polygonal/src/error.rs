//! Error types for mesh generation

use thiserror::Error;

/// Result type for mesh generation
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors reported by the mesh generators
///
/// All of them are raised before any buffer is allocated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Non-positive radius, segment count below the minimum, non-finite input,
    /// or a grid too large to index with `u32`
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The UV deltas of a triangle span no area, so the tangent frame is undefined
    #[error("Degenerate UV mapping (determinant {determinant})")]
    DegenerateUv { determinant: f32 },

    /// Triangle corners are collinear or coincident
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

impl MeshError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}
