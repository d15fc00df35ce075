//! Hand-rolled linear algebra: vectors, row-major 4x4 matrices, angles and the transform
//! builders built on top of them.

mod deg;
mod matrix4;
mod rad;
pub mod transform;
mod vector2;
mod vector3;

pub use self::{
    deg::Deg,
    matrix4::Matrix4,
    rad::Rad,
    transform::{model_matrix, rotate, rotate_x, rotate_y, rotate_z, scaling, translate},
    vector2::Vector2,
    vector3::Vector3,
};
