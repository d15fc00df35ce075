use crate::{
    math::{translate, Matrix4, Vector3},
    SceneError,
};
use serde::{Deserialize, Serialize};

/// A look-at camera.
///
/// The view matrix maps world space into camera space, with the eye at the origin looking down
/// the negative Z axis.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    /// The eye position
    pub position: Vector3,
    /// The point the camera looks at
    pub center: Vector3,
    /// The approximate up direction. It does not have to be perpendicular to the viewing
    /// direction, the basis is re-orthogonalized.
    pub up_vector: Vector3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 2.0),
            center: Vector3::zero(),
            up_vector: Vector3::new(0.0, 1.0, 0.0),
        }
    }
}

impl Camera {
    pub fn new(position: Vector3, center: Vector3, up_vector: Vector3) -> Self {
        Self {
            position,
            center,
            up_vector,
        }
    }

    /// The orthonormal `(right, up, forward)` basis of the camera, where `forward` points from
    /// the center towards the eye.
    pub fn basis(&self) -> Result<(Vector3, Vector3, Vector3), SceneError> {
        let forward = (self.position - self.center)
            .normalize()
            .map_err(|_| SceneError::DegenerateBasis)?;
        let right = self
            .up_vector
            .cross(forward)
            .normalize()
            .map_err(|_| SceneError::DegenerateBasis)?;
        let up = forward
            .cross(right)
            .normalize()
            .map_err(|_| SceneError::DegenerateBasis)?;
        Ok((right, up, forward))
    }

    /// Build the view matrix: a rotation whose rows are the camera basis, applied after
    /// translating the eye to the origin.
    pub fn view_matrix(&self) -> Result<Matrix4, SceneError> {
        let (r, u, f) = self.basis()?;
        #[rustfmt::skip]
        let rotation = Matrix4::new(
            r.x, r.y, r.z, 0.0,
            u.x, u.y, u.z, 0.0,
            f.x, f.y, f.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Ok(rotation * translate(-self.position))
    }
}
