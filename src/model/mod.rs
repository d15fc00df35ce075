mod data;
mod material;
pub mod mesh;

pub use self::{
    data::{ModelData, EYE_OFFSET_COUNT},
    material::{PhongMaterial, TextureHandle},
};

/// One drawable part of a model: all vertices that share a material.
///
/// The vertex buffers themselves live with the renderer; the scene only needs to know how many
/// vertices to draw and how to shade them.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub vertex_count: usize,
    pub material: PhongMaterial,
}
