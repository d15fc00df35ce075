use crate::SceneError;
use serde::{Deserialize, Serialize};

/// A three component vector, used for positions, scales, euler angles and colors.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// A vector with all three components set to `v`.
    pub fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    pub fn cross(self, rhs: Self) -> Self {
        let lhs: vek::Vec3<f32> = self.into();
        lhs.cross(rhs.into()).into()
    }

    pub fn dot(self, rhs: Self) -> f32 {
        let lhs: vek::Vec3<f32> = self.into();
        lhs.dot(rhs.into())
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Divide the vector by its magnitude.
    ///
    /// Fails with [SceneError::DegenerateGeometry] when the magnitude is (nearly) zero or not
    /// finite, instead of producing NaN components.
    ///
    /// [SceneError::DegenerateGeometry]: ../enum.SceneError.html#variant.DegenerateGeometry
    pub fn normalize(self) -> Result<Self, SceneError> {
        let length = self.length();
        if !length.is_finite() || length <= f32::EPSILON {
            return Err(SceneError::DegenerateGeometry {
                what: "cannot normalize a zero-length vector",
            });
        }
        Ok(self / length)
    }

    pub fn memberwise_min(self, rhs: Self) -> Self {
        Self {
            x: self.x.min(rhs.x),
            y: self.y.min(rhs.y),
            z: self.z.min(rhs.z),
        }
    }
    pub fn memberwise_max(self, rhs: Self) -> Self {
        Self {
            x: self.x.max(rhs.x),
            y: self.y.max(rhs.y),
            z: self.z.max(rhs.z),
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Into<[f32; 3]> for Vector3 {
    fn into(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<vek::Vec3<f32>> for Vector3 {
    fn from(v: vek::Vec3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Into<vek::Vec3<f32>> for Vector3 {
    fn into(self) -> vek::Vec3<f32> {
        vek::Vec3::new(self.x, self.y, self.z)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl std::ops::Mul<f32> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::ops::Div<f32> for Vector3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl approx::AbsDiffEq for Vector3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl approx::RelativeEq for Vector3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn dot_of_perpendicular_vectors_is_zero() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-2.0, 1.0, 0.0);
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(a.dot(a), 14.0);
        assert_eq!(a.cross(b).dot(a), 0.0);
    }

    #[test]
    fn normalize_scales_to_unit_length() {
        let v = Vector3::new(3.0, 0.0, 4.0).normalize().unwrap();
        assert_abs_diff_eq!(v, Vector3::new(0.6, 0.0, 0.8), epsilon = 1e-6);
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn normalize_rejects_zero_vector() {
        assert!(matches!(
            Vector3::zero().normalize(),
            Err(SceneError::DegenerateGeometry { .. })
        ));
        assert!(Vector3::new(f32::NAN, 0.0, 0.0).normalize().is_err());
    }
}
