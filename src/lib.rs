//! The scene core of a small model viewer: transform and camera math, projections, lights, and
//! the interactive state machine that turns keyboard and mouse input into scene edits.
//!
//! Rendering is left to the caller. Every frame it asks the [SceneState] for the matrices and
//! light parameters it needs to upload.
//!
//! # Example
//!
//! ```
//! use viewer_core::{model::ModelData, math::Vector3, Command, SceneState, TransformMode};
//! use viewer_core::config::SceneConfig;
//!
//! let mut scene = SceneState::new(SceneConfig::default(), vec![ModelData::default()]).unwrap();
//!
//! // Zoom the camera in by scrolling in eye mode
//! scene.apply(Command::SetTransformMode(TransformMode::ViewEye)).unwrap();
//! scene.scroll(5.0).unwrap();
//!
//! // The origin is now one unit in front of the camera
//! let origin = scene.view_matrix() * Vector3::zero();
//! assert!((origin.z + 1.0).abs() < 1e-5);
//!
//! // Column-major arrays, ready to upload
//! let uniforms = scene.frame_uniforms();
//! let _mvp = (uniforms.projection * uniforms.view * uniforms.model).to_cols_array();
//! ```
//!
//! [SceneState]: struct.SceneState.html

mod camera;
pub mod config;
mod error;
pub mod event;
mod lights;
pub mod math;
pub mod model;
mod projection;
mod scene_state;

pub use self::{
    camera::Camera,
    error::SceneError,
    lights::{LightKind, LightTable, LightingAttrib},
    projection::{orthogonal, perspective, ProjectionMode, ProjectionSetting, ViewportLayout},
    scene_state::{
        Command, FrameUniforms, MagFilter, MinFilter, PolygonMode, Response, SceneState,
        TextureFiltering, TransformMode,
    },
};

pub use winit::event::{VirtualKeyCode, WindowEvent};
