use super::Shape;
use crate::math::{model_matrix, Vector3};

/// Number of entries in the eye texture atlas. Every model's eye offset cursor wraps around
/// this many positions.
pub const EYE_OFFSET_COUNT: usize = 7;

/// Data of a model: where it is, how it is oriented and scaled, and the parts it is drawn with.
///
/// This is what the interactive transform modes edit. The model matrix is not cached, it is
/// rebuilt from these fields with [matrix](#method.matrix) whenever it is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelData {
    /// The current position in the world that this model exists at.
    pub position: Vector3,

    /// The rotation of this model, in euler angles (degrees).
    pub rotation: Vector3,

    /// The scale of this model, per axis.
    pub scale: Vector3,

    /// The parts of the model, one per material.
    pub shapes: Vec<Shape>,

    eye_offset: usize,
}

impl Default for ModelData {
    fn default() -> ModelData {
        Self {
            position: Vector3::zero(),
            rotation: Vector3::zero(),
            scale: Vector3::splat(1.0),
            shapes: Vec::new(),
            eye_offset: 0,
        }
    }
}

impl ModelData {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            ..Self::default()
        }
    }

    /// `T(position) · R(rotation) · S(scale)`
    pub fn matrix(&self) -> crate::math::Matrix4 {
        model_matrix(self.position, self.rotation, self.scale)
    }

    /// The total amount of vertices over all shapes.
    pub fn vertex_count(&self) -> usize {
        self.shapes.iter().map(|s| s.vertex_count).sum()
    }

    /// Index into the eye texture atlas that is currently shown.
    pub fn eye_offset(&self) -> usize {
        self.eye_offset
    }

    pub fn next_eye_offset(&mut self) {
        self.eye_offset = (self.eye_offset + 1) % EYE_OFFSET_COUNT;
    }

    pub fn previous_eye_offset(&mut self) {
        self.eye_offset = (self.eye_offset + EYE_OFFSET_COUNT - 1) % EYE_OFFSET_COUNT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_model_matrix_is_identity() {
        assert_eq!(ModelData::default().matrix(), crate::math::Matrix4::identity());
    }

    #[test]
    fn matrix_reflects_the_fields() {
        let mut model = ModelData::default();
        model.position = Vector3::new(0.0, 1.0, 0.0);
        model.scale = Vector3::new(1.0, 1.0, 3.0);
        assert_abs_diff_eq!(
            model.matrix() * Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 1.0, 3.0)
        );
    }

    #[test]
    fn eye_offset_wraps_both_ways() {
        let mut model = ModelData::default();
        model.previous_eye_offset();
        assert_eq!(model.eye_offset(), EYE_OFFSET_COUNT - 1);
        model.next_eye_offset();
        assert_eq!(model.eye_offset(), 0);
    }
}
