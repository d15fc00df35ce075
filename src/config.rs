//! Tunable constants of the viewer.
//!
//! Every field has a default, and the structs deserialize with `#[serde(default)]`, so a
//! configuration file only has to mention the values it changes:
//!
//! ```
//! # use viewer_core::config::SceneConfig;
//! let config = SceneConfig::from_json_str(r#"{ "sensitivity": { "rotate": 0.5 } }"#).unwrap();
//! assert_eq!(config.sensitivity.rotate, 0.5);
//! assert_eq!(config.sensitivity.translate, 0.002);
//! ```

use crate::{
    camera::Camera,
    projection::{ProjectionMode, ProjectionSetting, ViewportLayout},
    SceneError,
};
use serde::{Deserialize, Serialize};

/// Factors that turn cursor movement (in pixels) and scroll wheel steps into scene units.
///
/// Fields without a `_scroll` suffix apply to dragging with the left mouse button, the others
/// to one step of the scroll wheel.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSensitivity {
    /// Model translation, world units per pixel
    pub translate: f32,
    /// Model translation along Z, world units per scroll step
    pub translate_scroll: f32,
    /// Model scale per pixel
    pub scale: f32,
    /// Model scale along Z per scroll step
    pub scale_scroll: f32,
    /// Model rotation around X and Y, degrees per pixel
    pub rotate: f32,
    /// Model rotation around Z, degrees per scroll step
    pub rotate_scroll: f32,
    /// Camera eye movement per pixel
    pub eye: f32,
    pub eye_scroll: f32,
    /// Camera center movement per pixel
    pub center: f32,
    pub center_scroll: f32,
    /// Movement of the tip of the up vector per pixel
    pub up: f32,
    pub up_scroll: f32,
    /// Light position movement per pixel
    pub light: f32,
    /// Diffuse intensity change per scroll step, for directional and point lights
    pub diffuse_scroll: f32,
    /// Spot cutoff change in degrees per scroll step
    pub cutoff_scroll: f32,
    /// Shininess change per scroll step
    pub shininess_scroll: f32,
}

impl Default for InputSensitivity {
    fn default() -> Self {
        Self {
            translate: 0.002,
            translate_scroll: 0.02,
            scale: 0.002,
            scale_scroll: 0.02,
            rotate: 1.0,
            rotate_scroll: 1.0,
            eye: 0.02,
            eye_scroll: 0.2,
            center: 0.02,
            center_scroll: 0.2,
            up: 0.05,
            up_scroll: 0.2,
            light: 0.002,
            diffuse_scroll: 0.05,
            cutoff_scroll: 1.0,
            shininess_scroll: 10.0,
        }
    }
}

/// Everything needed to set up a scene apart from the models.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub sensitivity: InputSensitivity,
    pub camera: Camera,
    pub projection: ProjectionSetting,
    pub projection_mode: ProjectionMode,
    pub layout: ViewportLayout,
}

impl SceneConfig {
    pub fn from_json_str(src: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn from_reader(reader: impl std::io::Read) -> Result<Self, SceneError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
