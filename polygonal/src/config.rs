//! Configuration management (polygonal.toml)

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::cache::MeshKey;
use crate::error::Result as MeshResult;
use crate::scene::{SceneState, point_shadow_transforms};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sphere: SphereConfig,
    #[serde(default)]
    pub torus: TorusConfig,
    #[serde(default)]
    pub floor: FloorConfig,
    #[serde(default)]
    pub cube: CubeConfig,
    #[serde(default)]
    pub scene: SceneConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereConfig {
    #[serde(default = "default_sphere_segments")]
    pub x_segments: u32,
    #[serde(default = "default_sphere_segments")]
    pub y_segments: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorusConfig {
    #[serde(default = "default_minor_radius")]
    pub minor_radius: f32,
    #[serde(default = "default_major_radius")]
    pub major_radius: f32,
    #[serde(default = "default_ring_segments")]
    pub ring_segments: u32,
    #[serde(default = "default_cross_segments")]
    pub cross_segments: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorConfig {
    #[serde(default = "default_floor_extent")]
    pub half_extent: f32,
    #[serde(default = "default_floor_height")]
    pub height: f32,
    #[serde(default = "default_floor_extent")]
    pub uv_repeat: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeConfig {
    #[serde(default = "default_cube_extent")]
    pub half_extent: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_height_scale")]
    pub height_scale: f32,
    #[serde(default = "default_shadow_near")]
    pub shadow_near: f32,
    #[serde(default = "default_shadow_far")]
    pub shadow_far: f32,
    #[serde(default = "default_shadow_resolution")]
    pub shadow_resolution: u32,
}

fn default_sphere_segments() -> u32 { 64 }
fn default_minor_radius() -> f32 { 0.2 }
fn default_major_radius() -> f32 { 0.45 }
fn default_ring_segments() -> u32 { 64 }
fn default_cross_segments() -> u32 { 32 }
fn default_floor_extent() -> f32 { 25.0 }
fn default_floor_height() -> f32 { -0.5 }
fn default_cube_extent() -> f32 { 0.5 }
fn default_height_scale() -> f32 { 0.1 }
fn default_shadow_near() -> f32 { 1.0 }
fn default_shadow_far() -> f32 { 25.0 }
fn default_shadow_resolution() -> u32 { 1024 }

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            x_segments: default_sphere_segments(),
            y_segments: default_sphere_segments(),
        }
    }
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            minor_radius: default_minor_radius(),
            major_radius: default_major_radius(),
            ring_segments: default_ring_segments(),
            cross_segments: default_cross_segments(),
        }
    }
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            half_extent: default_floor_extent(),
            height: default_floor_height(),
            uv_repeat: default_floor_extent(),
        }
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            half_extent: default_cube_extent(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            height_scale: default_height_scale(),
            shadow_near: default_shadow_near(),
            shadow_far: default_shadow_far(),
            shadow_resolution: default_shadow_resolution(),
        }
    }
}

impl SphereConfig {
    pub fn key(&self) -> MeshKey {
        MeshKey::Sphere {
            x_segments: self.x_segments,
            y_segments: self.y_segments,
        }
    }
}

impl TorusConfig {
    pub fn key(&self) -> MeshKey {
        MeshKey::torus(
            self.minor_radius,
            self.major_radius,
            self.ring_segments,
            self.cross_segments,
        )
    }
}

impl FloorConfig {
    pub fn key(&self) -> MeshKey {
        MeshKey::floor(self.half_extent, self.height, self.uv_repeat)
    }
}

impl CubeConfig {
    pub fn key(&self) -> MeshKey {
        MeshKey::cube(self.half_extent)
    }
}

impl SceneConfig {
    /// Scene state at startup
    pub fn initial_state(&self) -> SceneState {
        SceneState::new(self.height_scale)
    }

    /// Shadow cubemap matrices using the configured clip planes
    pub fn shadow_transforms(&self, light_pos: Vec3) -> MeshResult<[Mat4; 6]> {
        point_shadow_transforms(light_pos, self.shadow_near, self.shadow_far)
    }
}

impl Config {
    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Read a config file, falling back to defaults when it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!("Failed to load {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Every scene mesh this config describes, named for export
    pub fn scene_meshes(&self) -> [(&'static str, MeshKey); 6] {
        [
            ("floor", self.floor.key()),
            ("cube", self.cube.key()),
            ("skybox", MeshKey::Skybox),
            ("wall", MeshKey::Wall),
            ("sphere", self.sphere.key()),
            ("torus", self.torus.key()),
        ]
    }
}
