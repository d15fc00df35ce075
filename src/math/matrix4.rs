use super::Vector3;
use std::fmt;

/// A 4x4 matrix stored in row-major order: `self.0[row][column]`.
///
/// Points are treated as column vectors, so `a * b` applies `b` first. GL-style consumers that
/// expect column-major data should upload [to_cols_array](#method.to_cols_array) (or the
/// [transpose](#method.transpose)).
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4(pub [[f32; 4]; 4]);

impl Matrix4 {
    /// Create a matrix from its sixteen entries, given row by row.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m03: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m13: f32,
        m20: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m30: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Self([
            [m00, m01, m02, m03],
            [m10, m11, m12, m13],
            [m20, m21, m22, m23],
            [m30, m31, m32, m33],
        ])
    }

    pub fn identity() -> Self {
        vek::Mat4::identity().into()
    }

    pub fn transpose(self) -> Self {
        vek::Mat4::from(self).transposed().into()
    }

    /// The translation part of an affine matrix.
    pub fn position(self) -> Vector3 {
        Vector3::new(self.0[0][3], self.0[1][3], self.0[2][3])
    }

    /// Flatten row by row.
    pub fn to_rows_array(self) -> [f32; 16] {
        let mut result = [0.0; 16];
        for (row, values) in self.0.iter().enumerate() {
            result[row * 4..row * 4 + 4].copy_from_slice(values);
        }
        result
    }

    /// Flatten column by column, the layout `glUniformMatrix4fv(.., GL_FALSE, ..)` expects.
    pub fn to_cols_array(self) -> [f32; 16] {
        self.transpose().to_rows_array()
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().flatten().all(|v| v.is_finite())
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Index<(usize, usize)> for Matrix4 {
    type Output = f32;
    fn index(&self, (row, column): (usize, usize)) -> &f32 {
        &self.0[row][column]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix4 {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f32 {
        &mut self.0[row][column]
    }
}

impl std::ops::Mul for Matrix4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        (vek::Mat4::from(self) * vek::Mat4::from(rhs)).into()
    }
}

/// Transform a point (`w = 1`). The result is divided by the resulting `w` unless it is 0 or 1,
/// so this also works for projection matrices.
impl std::ops::Mul<Vector3> for Matrix4 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        let v = [rhs.x, rhs.y, rhs.z, 1.0];
        let row = |r: usize| (0..4).map(|k| self.0[r][k] * v[k]).sum::<f32>();
        let (x, y, z, w) = (row(0), row(1), row(2), row(3));
        if w == 0.0 || w == 1.0 {
            Vector3::new(x, y, z)
        } else {
            Vector3::new(x / w, y / w, z / w)
        }
    }
}

impl Into<[[f32; 4]; 4]> for Matrix4 {
    fn into(self) -> [[f32; 4]; 4] {
        self.0
    }
}

impl From<Matrix4> for vek::Mat4<f32> {
    fn from(m: Matrix4) -> Self {
        let m = m.0;
        #[rustfmt::skip]
        let result = vek::Mat4::new(
            m[0][0], m[0][1], m[0][2], m[0][3],
            m[1][0], m[1][1], m[1][2], m[1][3],
            m[2][0], m[2][1], m[2][2], m[2][3],
            m[3][0], m[3][1], m[3][2], m[3][3],
        );
        result
    }
}

impl From<vek::Mat4<f32>> for Matrix4 {
    fn from(m: vek::Mat4<f32>) -> Self {
        Self(m.into_row_arrays())
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.0 {
            writeln!(
                f,
                "[ {:>10.4} {:>10.4} {:>10.4} {:>10.4} ]",
                row[0], row[1], row[2], row[3]
            )?;
        }
        Ok(())
    }
}

impl approx::AbsDiffEq for Matrix4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl approx::RelativeEq for Matrix4 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplication_is_row_by_column() {
        #[rustfmt::skip]
        let a = Matrix4::new(
            1.0, 2.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        #[rustfmt::skip]
        let b = Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            3.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        let ab = a * b;
        assert_eq!(ab[(0, 0)], 7.0);
        assert_eq!(ab[(0, 1)], 2.0);
        assert_eq!(ab[(1, 0)], 3.0);
        assert_ne!(ab, b * a);
    }

    #[test]
    fn identity_is_neutral() {
        let m = Matrix4([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(m * Matrix4::identity(), m);
        assert_eq!(Matrix4::identity() * m, m);
    }

    #[test]
    fn column_array_is_transposed_row_array() {
        let m = Matrix4([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(m.to_rows_array()[1], 2.0);
        assert_eq!(m.to_cols_array()[1], 5.0);
        assert_eq!(m.to_cols_array()[12], 4.0);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn vek_round_trip_keeps_rows() {
        let m = Matrix4([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let v: vek::Mat4<f32> = m.into();
        assert_eq!(v.into_row_arrays()[0][3], 4.0);
        assert_eq!(Matrix4::from(v), m);
    }
}
