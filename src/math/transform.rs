//! Builders for the matrices that place a model in the world.
//!
//! All builders are pure and never fail. Non-finite input simply ends up as non-finite entries.

use super::{Deg, Matrix4, Rad, Vector3};

/// Identity matrix with `v` in the last column.
pub fn translate(v: Vector3) -> Matrix4 {
    #[rustfmt::skip]
    let result = Matrix4::new(
        1.0, 0.0, 0.0, v.x,
        0.0, 1.0, 0.0, v.y,
        0.0, 0.0, 1.0, v.z,
        0.0, 0.0, 0.0, 1.0,
    );
    result
}

/// `diag(v.x, v.y, v.z, 1)`
pub fn scaling(v: Vector3) -> Matrix4 {
    #[rustfmt::skip]
    let result = Matrix4::new(
        v.x, 0.0, 0.0, 0.0,
        0.0, v.y, 0.0, 0.0,
        0.0, 0.0, v.z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    result
}

fn sin_cos(degrees: f32) -> (f32, f32) {
    let rad: Rad = Deg(degrees).into();
    rad.sin_cos()
}

/// Rotation around the X axis, counter-clockwise when looking down the axis towards the origin.
pub fn rotate_x(degrees: f32) -> Matrix4 {
    let (s, c) = sin_cos(degrees);
    #[rustfmt::skip]
    let result = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0,   c,  -s, 0.0,
        0.0,   s,   c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    result
}

pub fn rotate_y(degrees: f32) -> Matrix4 {
    let (s, c) = sin_cos(degrees);
    #[rustfmt::skip]
    let result = Matrix4::new(
          c, 0.0,   s, 0.0,
        0.0, 1.0, 0.0, 0.0,
         -s, 0.0,   c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    result
}

pub fn rotate_z(degrees: f32) -> Matrix4 {
    let (s, c) = sin_cos(degrees);
    #[rustfmt::skip]
    let result = Matrix4::new(
          c,  -s, 0.0, 0.0,
          s,   c, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    result
}

/// Combined euler rotation `Rx · Ry · Rz`, angles in degrees.
///
/// The order is fixed. Swapping the factors gives a different orientation.
pub fn rotate(euler: Vector3) -> Matrix4 {
    rotate_x(euler.x) * rotate_y(euler.y) * rotate_z(euler.z)
}

/// `T · R · S`: scale first, then rotate, then translate.
pub fn model_matrix(position: Vector3, rotation: Vector3, scale: Vector3) -> Matrix4 {
    translate(position) * rotate(rotation) * scaling(scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne};
    use rand::Rng;

    fn random_vector(rng: &mut impl Rng, range: f32) -> Vector3 {
        Vector3::new(
            rng.gen_range(-range, range),
            rng.gen_range(-range, range),
            rng.gen_range(-range, range),
        )
    }

    #[test]
    fn zero_angle_rotations_leave_points_alone() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let v = random_vector(&mut rng, 10.0);
            assert_abs_diff_eq!(rotate_x(0.0) * v, v);
            assert_abs_diff_eq!(rotate_y(0.0) * v, v);
            assert_abs_diff_eq!(rotate_z(0.0) * v, v);
        }
    }

    #[test]
    fn rotations_are_orthogonal() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let angle = rng.gen_range(-720.0, 720.0);
            for r in &[rotate_x(angle), rotate_y(angle), rotate_z(angle)] {
                assert_abs_diff_eq!(*r * r.transpose(), Matrix4::identity(), epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn quarter_turns_follow_the_right_hand_rule() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);
        assert_abs_diff_eq!(rotate_z(90.0) * x, y, epsilon = 1e-6);
        assert_abs_diff_eq!(rotate_x(90.0) * y, z, epsilon = 1e-6);
        assert_abs_diff_eq!(rotate_y(90.0) * z, x, epsilon = 1e-6);
    }

    #[test]
    fn translation_is_undone_by_its_negation() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let v = random_vector(&mut rng, 100.0);
            assert_abs_diff_eq!(
                translate(v) * translate(-v),
                Matrix4::identity(),
                epsilon = 1e-4
            );
        }
    }

    #[test]
    fn scaling_is_undone_by_its_reciprocal() {
        let mut rng = rand::thread_rng();
        for _ in 0..32 {
            let v = Vector3::new(
                rng.gen_range(0.1, 10.0),
                rng.gen_range(-10.0, -0.1),
                rng.gen_range(0.1, 10.0),
            );
            let inverse = Vector3::new(1.0 / v.x, 1.0 / v.y, 1.0 / v.z);
            assert_abs_diff_eq!(
                scaling(v) * scaling(inverse),
                Matrix4::identity(),
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn rotation_order_matters() {
        let a = rotate_x(30.0) * rotate_y(45.0);
        let b = rotate_y(45.0) * rotate_x(30.0);
        assert_abs_diff_ne!(a, b, epsilon = 1e-3);
        assert_abs_diff_eq!(
            rotate(Vector3::new(30.0, 45.0, 0.0)),
            a,
            epsilon = 1e-6
        );
    }

    #[test]
    fn model_matrix_scales_then_rotates_then_translates() {
        let m = model_matrix(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 0.0, 90.0),
            Vector3::new(2.0, 1.0, 1.0),
        );
        // (1,0,0) -> scaled (2,0,0) -> rotated (0,2,0) -> translated (1,4,3)
        assert_abs_diff_eq!(
            m * Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 4.0, 3.0),
            epsilon = 1e-5
        );
        assert_eq!(m.position(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn non_finite_input_propagates() {
        assert!(!scaling(Vector3::new(f32::INFINITY, 1.0, 1.0)).is_finite());
        assert!(!translate(Vector3::new(f32::NAN, 0.0, 0.0)).is_finite());
    }
}
