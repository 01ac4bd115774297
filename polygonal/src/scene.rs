//! Explicit scene state and per-frame transforms
//!
//! Everything the render loop needs besides geometry: display toggles,
//! the parallax height scale, point-light parameters and the matrices for the
//! omnidirectional shadow pass. Nothing here touches the GL context.

use glam::{Mat4, Vec3};

use crate::error::{MeshError, Result};

/// Per-frame step applied by [`SceneState::adjust_height_scale`] in the demo
pub const HEIGHT_SCALE_STEP: f32 = 0.0005;

/// Rotation applied to even-indexed cubes, in radians
const STATIC_CUBE_ANGLE: f32 = 15.0;

/// Direction of a height-scale adjustment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeightAdjust {
    Decrease,
    Increase,
}

/// Mutable application state driven by keyboard input
#[derive(Clone, Debug, PartialEq)]
pub struct SceneState {
    /// Render with the shadow-mapped light instead of the point lights
    pub shadows: bool,
    /// Draw polygons as lines
    pub wireframe: bool,
    /// Parallax mapping depth, kept in `[0, 1]`
    pub height_scale: f32,
    shadow_key_held: bool,
    wireframe_key_held: bool,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl SceneState {
    pub fn new(height_scale: f32) -> Self {
        Self {
            shadows: true,
            wireframe: false,
            height_scale: height_scale.clamp(0.0, 1.0),
            shadow_key_held: false,
            wireframe_key_held: false,
        }
    }

    /// Feed the current state of the shadow toggle key
    ///
    /// Flips `shadows` once per press; holding the key has no further effect.
    /// Returns `true` when the flag changed.
    pub fn update_shadow_key(&mut self, pressed: bool) -> bool {
        let toggled = pressed && !self.shadow_key_held;
        if toggled {
            self.shadows = !self.shadows;
        }
        self.shadow_key_held = pressed;
        toggled
    }

    /// Feed the current state of the wireframe toggle key (edge-triggered)
    pub fn update_wireframe_key(&mut self, pressed: bool) -> bool {
        let toggled = pressed && !self.wireframe_key_held;
        if toggled {
            self.wireframe = !self.wireframe;
        }
        self.wireframe_key_held = pressed;
        toggled
    }

    /// Nudge the parallax height scale, clamping to `[0, 1]`
    pub fn adjust_height_scale(&mut self, direction: HeightAdjust, step: f32) {
        let delta = match direction {
            HeightAdjust::Decrease => -step,
            HeightAdjust::Increase => step,
        };
        self.height_scale = (self.height_scale + delta).clamp(0.0, 1.0);
    }
}

/// Point light with the demo's fixed attenuation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
}

impl PointLight {
    pub const CONSTANT: f32 = 1.0;
    pub const LINEAR: f32 = 0.09;
    pub const QUADRATIC: f32 = 0.032;

    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }

    pub fn ambient(&self) -> Vec3 {
        self.color * 0.1
    }

    pub fn diffuse(&self) -> Vec3 {
        self.color
    }

    pub fn specular(&self) -> Vec3 {
        self.color
    }

    /// Light falloff at `distance`
    pub fn attenuation(&self, distance: f32) -> f32 {
        1.0 / (Self::CONSTANT + Self::LINEAR * distance + Self::QUADRATIC * distance * distance)
    }
}

/// Position of the shadow-casting light at `time` seconds
pub fn shadow_light_position(time: f32) -> Vec3 {
    Vec3::new(3.0, 1.0, (time * 0.5).sin() * 3.0)
}

/// View-projection matrices for the six faces of a point-light depth cubemap
///
/// Face order is +X, -X, +Y, -Y, +Z, -Z, matching cubemap layer order.
pub fn point_shadow_transforms(light_pos: Vec3, near: f32, far: f32) -> Result<[Mat4; 6]> {
    if !(near.is_finite() && near > 0.0) {
        return Err(MeshError::invalid(format!("shadow near plane must be > 0.0, got {near}")));
    }
    if !(far.is_finite() && far > near) {
        return Err(MeshError::invalid(format!(
            "shadow far plane must exceed near ({near}), got {far}"
        )));
    }

    let projection = Mat4::perspective_rh_gl(90f32.to_radians(), 1.0, near, far);
    let faces = [
        (Vec3::X, Vec3::NEG_Y),
        (Vec3::NEG_X, Vec3::NEG_Y),
        (Vec3::Y, Vec3::Z),
        (Vec3::NEG_Y, Vec3::NEG_Z),
        (Vec3::Z, Vec3::NEG_Y),
        (Vec3::NEG_Z, Vec3::NEG_Y),
    ];

    Ok(faces.map(|(direction, up)| {
        projection * Mat4::look_at_rh(light_pos, light_pos + direction, up)
    }))
}

/// Model matrix of the `index`-th cube: odd cubes spin with time, even ones are fixed
pub fn cube_model_matrix(index: u32, position: Vec3, time: f32) -> Mat4 {
    let angle = if index % 2 == 1 { time } else { STATIC_CUBE_ANGLE };
    let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
    Mat4::from_translation(position) * Mat4::from_axis_angle(axis, index as f32 * angle)
}

/// Model matrix of the parallax wall, slowly rotating to show the effect from several angles
pub fn wall_model_matrix(position: Vec3, time: f32) -> Mat4 {
    let axis = Vec3::new(1.0, 0.0, 1.0).normalize();
    Mat4::from_translation(position) * Mat4::from_axis_angle(axis, (time * -5.0).to_radians())
}
