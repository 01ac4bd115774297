//! Strip-indexed parametric surfaces (UV sphere, torus)

use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};
use tracing::debug;

use super::strip::strip_indices;
use super::types::{Mesh, Topology, Vertex, VertexLayout};
use crate::error::{MeshError, Result};

/// Generate a unit UV sphere as a single triangle strip
///
/// # Arguments
/// * `x_segments` - Longitudinal divisions (min 1)
/// * `y_segments` - Latitudinal divisions (min 1)
///
/// # Returns
/// `(x_segments + 1) × (y_segments + 1)` vertices in row-major order
/// (row = latitude from +Y down to -Y), `2 × y_segments × (x_segments + 1)`
/// strip indices, layout `PositionNormalUv`.
///
/// Normals equal positions; UV is `(x / x_segments, y / y_segments)`.
pub fn generate_sphere(x_segments: u32, y_segments: u32) -> Result<Mesh> {
    if x_segments < 1 || y_segments < 1 {
        return Err(MeshError::invalid(format!(
            "sphere needs at least 1×1 segments, got {x_segments}×{y_segments}"
        )));
    }

    let columns = x_segments as u64 + 1;
    let rows = y_segments as u64 + 1;
    let vertex_count = checked_vertex_count(columns * rows, "sphere")?;
    let index_count = 2 * y_segments as usize * columns as usize;

    let mut mesh = Mesh::with_capacity(
        VertexLayout::PositionNormalUv,
        Topology::TriangleStrip,
        vertex_count,
        index_count,
    );

    for y in 0..=y_segments {
        let y_segment = y as f32 / y_segments as f32;
        let (sin_phi, cos_phi) = (y_segment * PI).sin_cos();

        for x in 0..=x_segments {
            let x_segment = x as f32 / x_segments as f32;
            let (sin_theta, cos_theta) = (x_segment * TAU).sin_cos();

            let position = Vec3::new(cos_theta * sin_phi, cos_phi, sin_theta * sin_phi);
            mesh.push_vertex(Vertex::new(position, position, Vec2::new(x_segment, y_segment)));
        }
    }

    mesh.indices = strip_indices(y_segments, x_segments + 1);

    debug!(
        x_segments,
        y_segments,
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        "generated sphere"
    );
    Ok(mesh)
}

/// Generate a torus as a single triangle strip
///
/// # Arguments
/// * `minor_radius` - Tube radius `r` (> 0)
/// * `major_radius` - Distance `c` from the torus center to the tube center (> 0)
/// * `ring_segments` - Segments `R` around the tube (min 3)
/// * `cross_segments` - Segments `C` around the central axis (min 3)
///
/// # Returns
/// `2 × (R + 1) × (C + 1)` vertices and `2 × C × (R + 1)` strip indices,
/// layout `PositionNormalUv`. The surface lies in the XY plane around +Z and is
/// scaled by 2.
///
/// # Vertex Order
/// Each grid slot `(i, j)` stores two vertices, `k = 0` then `k = 1`, sampled at
/// tube angle `((i + k) mod R + 0.5) / R`. Slot `(i, j, k)` lives at index
/// `(i × (C + 1) + j) × 2 + k`.
///
/// Normals are set to the scaled position vector rather than the analytic
/// tube normal.
pub fn generate_torus(
    minor_radius: f32,
    major_radius: f32,
    ring_segments: u32,
    cross_segments: u32,
) -> Result<Mesh> {
    if !(minor_radius.is_finite() && minor_radius > 0.0) {
        return Err(MeshError::invalid(format!(
            "torus minor_radius must be > 0.0, got {minor_radius}"
        )));
    }
    if !(major_radius.is_finite() && major_radius > 0.0) {
        return Err(MeshError::invalid(format!(
            "torus major_radius must be > 0.0, got {major_radius}"
        )));
    }
    if ring_segments < 3 || cross_segments < 3 {
        return Err(MeshError::invalid(format!(
            "torus needs at least 3×3 segments, got {ring_segments}×{cross_segments}"
        )));
    }

    let rings = ring_segments as u64 + 1;
    let crosses = cross_segments as u64 + 1;
    let vertex_count = checked_vertex_count(2 * rings * crosses, "torus")?;
    let index_count = 2 * cross_segments as usize * rings as usize;

    let mut mesh = Mesh::with_capacity(
        VertexLayout::PositionNormalUv,
        Topology::TriangleStrip,
        vertex_count,
        index_count,
    );

    let r = minor_radius as f64;
    let c = major_radius as f64;
    let ring_count = ring_segments as f64;
    let cross_count = cross_segments as f64;

    for i in 0..=ring_segments {
        for j in 0..=cross_segments {
            for k in 0..2 {
                let s = ((i + k) % ring_segments) as f64 + 0.5;
                let t = (j % (cross_segments + 1)) as f64;

                let tube_angle = s * std::f64::consts::TAU / ring_count;
                let axis_angle = t * std::f64::consts::TAU / cross_count;
                let ring = c + r * tube_angle.cos();

                let position = Vec3::new(
                    (2.0 * ring * axis_angle.cos()) as f32,
                    (2.0 * ring * axis_angle.sin()) as f32,
                    (2.0 * r * tube_angle.sin()) as f32,
                );
                let uv = Vec2::new(
                    (i + k) as f32 / ring_segments as f32,
                    (t / cross_count) as f32,
                );

                mesh.push_vertex(Vertex::new(position, position, uv));
            }
        }
    }

    mesh.indices = strip_indices(cross_segments, ring_segments + 1);

    debug!(
        minor_radius,
        major_radius,
        ring_segments,
        cross_segments,
        vertices = mesh.vertex_count(),
        indices = mesh.index_count(),
        "generated torus"
    );
    Ok(mesh)
}

/// Reject grids whose vertex count cannot be addressed by a `u32` index
fn checked_vertex_count(count: u64, shape: &str) -> Result<usize> {
    if count > u32::MAX as u64 {
        return Err(MeshError::invalid(format!(
            "{shape} would need {count} vertices, more than a u32 index can address"
        )));
    }
    Ok(count as usize)
}
