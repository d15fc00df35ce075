use crate::{
    math::{Deg, Matrix4, Rad},
    SceneError,
};
use serde::{Deserialize, Serialize};

/// Which projection builder is active.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionMode {
    Orthogonal,
    Perspective,
}

impl Default for ProjectionMode {
    fn default() -> Self {
        ProjectionMode::Perspective
    }
}

/// How the window is split into viewports.
///
/// With `SideBySide` the scene is drawn twice, once in each half of the window, so every
/// viewport is half as wide as the window.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportLayout {
    Single,
    SideBySide,
}

impl Default for ViewportLayout {
    fn default() -> Self {
        ViewportLayout::Single
    }
}

impl ViewportLayout {
    /// The width of a single viewport for a window of the given width.
    pub fn viewport_width(self, window_width: u32) -> u32 {
        match self {
            ViewportLayout::Single => window_width,
            ViewportLayout::SideBySide => window_width / 2,
        }
    }
}

/// The parameters both projection builders read from.
///
/// The orthogonal projection uses the bounds and clip planes, the perspective projection uses
/// `fovy`, `aspect` and the clip planes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSetting {
    pub near_clip: f32,
    pub far_clip: f32,
    /// Vertical field of view, in degrees
    pub fovy: f32,
    pub aspect: f32,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for ProjectionSetting {
    fn default() -> Self {
        Self {
            near_clip: 0.001,
            far_clip: 100.0,
            fovy: 80.0,
            aspect: 800.0 / 600.0,
            left: -1.0,
            right: 1.0,
            top: 1.0,
            bottom: -1.0,
        }
    }
}

impl ProjectionSetting {
    /// Derive the matrix of the given mode.
    ///
    /// In a side-by-side layout the horizontal orthogonal bounds are halved, so the box keeps
    /// its proportions in a viewport half as wide as the window.
    pub fn matrix(
        &self,
        mode: ProjectionMode,
        layout: ViewportLayout,
    ) -> Result<Matrix4, SceneError> {
        match mode {
            ProjectionMode::Orthogonal => {
                let (left, right) = match layout {
                    ViewportLayout::Single => (self.left, self.right),
                    ViewportLayout::SideBySide => (self.left / 2.0, self.right / 2.0),
                };
                orthogonal(
                    left,
                    right,
                    self.bottom,
                    self.top,
                    self.near_clip,
                    self.far_clip,
                )
            }
            ProjectionMode::Perspective => {
                perspective(self.fovy, self.aspect, self.near_clip, self.far_clip)
            }
        }
    }

    /// Recompute the aspect ratio and the orthogonal bounds for a new window size.
    ///
    /// The bounds keep the short side of the window at `[-1, 1]` and stretch the long side by
    /// the window ratio. Nothing changes when either dimension is zero.
    pub fn resize(
        &mut self,
        width: u32,
        height: u32,
        layout: ViewportLayout,
    ) -> Result<(), SceneError> {
        let viewport_width = layout.viewport_width(width);
        if viewport_width == 0 || height == 0 {
            return Err(SceneError::DegenerateViewport { width, height });
        }
        self.aspect = viewport_width as f32 / height as f32;

        let (w, h) = (width as f32, height as f32);
        let (left, right, bottom, top) = if width > height {
            (-w / h, w / h, -1.0, 1.0)
        } else if width < height {
            (-1.0, 1.0, -h / w, h / w)
        } else {
            (-1.0, 1.0, -1.0, 1.0)
        };
        self.left = left;
        self.right = right;
        self.bottom = bottom;
        self.top = top;
        Ok(())
    }
}

/// The orthographic projection that maps the given box onto the clip cube.
pub fn orthogonal(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Result<Matrix4, SceneError> {
    if right == left {
        return Err(SceneError::DegenerateProjection {
            reason: "left and right bounds are equal",
        });
    }
    if top == bottom {
        return Err(SceneError::DegenerateProjection {
            reason: "top and bottom bounds are equal",
        });
    }
    if far == near {
        return Err(SceneError::DegenerateProjection {
            reason: "near and far clip planes are equal",
        });
    }

    let tx = -(right + left) / (right - left);
    let ty = -(top + bottom) / (top - bottom);
    let tz = -(far + near) / (far - near);

    #[rustfmt::skip]
    let result = Matrix4::new(
        2.0 / (right - left), 0.0,                  0.0,                 tx,
        0.0,                  2.0 / (top - bottom), 0.0,                 ty,
        0.0,                  0.0,                  -2.0 / (far - near), tz,
        0.0,                  0.0,                  0.0,                 1.0,
    );
    Ok(result)
}

/// A perspective projection with a vertical field of view of `fovy` degrees.
///
/// On portrait viewports (`aspect < 1`) the horizontal term keeps `f` and the vertical term is
/// scaled by the aspect instead, so narrow windows are not stretched vertically.
pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Result<Matrix4, SceneError> {
    if !(fovy > 0.0 && fovy < 180.0) {
        return Err(SceneError::DegenerateProjection {
            reason: "the vertical field of view must be between 0 and 180 degrees",
        });
    }
    if !(aspect > 0.0) || !aspect.is_finite() {
        return Err(SceneError::DegenerateProjection {
            reason: "the aspect ratio must be positive",
        });
    }
    if far == near {
        return Err(SceneError::DegenerateProjection {
            reason: "near and far clip planes are equal",
        });
    }

    let fovy: Rad = Deg(fovy).into();
    let f = (fovy / 2.0).cot();
    let (x, y) = if aspect >= 1.0 {
        (f / aspect, f)
    } else {
        (f, f * aspect)
    };
    let m22 = (far + near) / (near - far);
    let m23 = (2.0 * far * near) / (near - far);

    #[rustfmt::skip]
    let result = Matrix4::new(
          x, 0.0,  0.0, 0.0,
        0.0,   y,  0.0, 0.0,
        0.0, 0.0,  m22, m23,
        0.0, 0.0, -1.0, 0.0,
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use approx::assert_abs_diff_eq;

    #[test]
    fn perspective_with_a_right_angle_has_unit_focal_length() {
        let m = perspective(90.0, 1.0, 0.1, 100.0).unwrap();
        assert_abs_diff_eq!(m[(0, 0)], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(m[(1, 1)], 1.0, epsilon = 1e-6);
        assert_eq!(m[(2, 2)], (100.0 + 0.1) / (0.1 - 100.0));
        assert_eq!(m[(2, 3)], (2.0 * 100.0 * 0.1) / (0.1 - 100.0));
        assert_eq!(m[(3, 2)], -1.0);
        assert_eq!(m[(3, 3)], 0.0);
    }

    #[test]
    fn perspective_switches_terms_on_portrait_viewports() {
        let wide = perspective(90.0, 2.0, 0.1, 100.0).unwrap();
        assert_abs_diff_eq!(wide[(0, 0)], 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(wide[(1, 1)], 1.0, epsilon = 1e-6);

        let narrow = perspective(90.0, 0.5, 0.1, 100.0).unwrap();
        assert_abs_diff_eq!(narrow[(0, 0)], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(narrow[(1, 1)], 0.5, epsilon = 1e-6);
    }

    #[test]
    fn perspective_maps_clip_planes_to_the_clip_cube() {
        let m = perspective(60.0, 1.5, 0.5, 50.0).unwrap();
        assert_abs_diff_eq!((m * Vector3::new(0.0, 0.0, -0.5)).z, -1.0, epsilon = 1e-4);
        assert_abs_diff_eq!((m * Vector3::new(0.0, 0.0, -50.0)).z, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn landscape_perspective_matches_vek() {
        let m = perspective(70.0, 1.6, 0.1, 20.0).unwrap();
        let expected: Matrix4 =
            vek::Mat4::<f32>::perspective_rh_no(70f32.to_radians(), 1.6, 0.1, 20.0).into();
        assert_abs_diff_eq!(m, expected, epsilon = 1e-5);
    }

    #[test]
    fn orthogonal_maps_the_box_to_the_clip_cube() {
        let m = orthogonal(-2.0, 4.0, -1.0, 3.0, 0.5, 10.0).unwrap();
        assert_abs_diff_eq!(
            m * Vector3::new(-2.0, -1.0, -0.5),
            Vector3::new(-1.0, -1.0, -1.0),
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            m * Vector3::new(4.0, 3.0, -10.0),
            Vector3::new(1.0, 1.0, 1.0),
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(m[(0, 3)], -1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn degenerate_volumes_are_rejected() {
        assert!(orthogonal(1.0, 1.0, -1.0, 1.0, 0.1, 10.0).is_err());
        assert!(orthogonal(-1.0, 1.0, 1.0, 1.0, 0.1, 10.0).is_err());
        assert!(orthogonal(-1.0, 1.0, -1.0, 1.0, 5.0, 5.0).is_err());
        assert!(perspective(0.0, 1.0, 0.1, 10.0).is_err());
        assert!(perspective(180.0, 1.0, 0.1, 10.0).is_err());
        assert!(perspective(60.0, 0.0, 0.1, 10.0).is_err());
        assert!(perspective(60.0, f32::NAN, 0.1, 10.0).is_err());
        assert!(perspective(60.0, 1.0, 3.0, 3.0).is_err());
    }

    #[test]
    fn resize_wide_window() {
        let mut setting = ProjectionSetting::default();
        setting.resize(800, 400, ViewportLayout::Single).unwrap();
        assert_eq!(setting.aspect, 2.0);
        assert_eq!(
            (setting.left, setting.right, setting.bottom, setting.top),
            (-2.0, 2.0, -1.0, 1.0)
        );
    }

    #[test]
    fn resize_tall_window() {
        let mut setting = ProjectionSetting::default();
        setting.resize(300, 600, ViewportLayout::Single).unwrap();
        assert_eq!(setting.aspect, 0.5);
        assert_eq!(
            (setting.left, setting.right, setting.bottom, setting.top),
            (-1.0, 1.0, -2.0, 2.0)
        );
    }

    #[test]
    fn resize_square_window() {
        let mut setting = ProjectionSetting::default();
        setting.left = -5.0;
        setting.resize(500, 500, ViewportLayout::Single).unwrap();
        assert_eq!(setting.aspect, 1.0);
        assert_eq!(
            (setting.left, setting.right, setting.bottom, setting.top),
            (-1.0, 1.0, -1.0, 1.0)
        );
    }

    #[test]
    fn side_by_side_halves_the_viewport() {
        let mut setting = ProjectionSetting::default();
        setting.resize(801, 600, ViewportLayout::SideBySide).unwrap();
        assert_eq!(setting.aspect, 400.0 / 600.0);

        let single = setting
            .matrix(ProjectionMode::Orthogonal, ViewportLayout::Single)
            .unwrap();
        let split = setting
            .matrix(ProjectionMode::Orthogonal, ViewportLayout::SideBySide)
            .unwrap();
        assert_abs_diff_eq!(split[(0, 0)], 2.0 * single[(0, 0)], epsilon = 1e-6);
        assert_eq!(split[(1, 1)], single[(1, 1)]);
    }

    #[test]
    fn resize_to_nothing_keeps_the_settings() {
        let mut setting = ProjectionSetting::default();
        let before = setting;
        assert!(matches!(
            setting.resize(0, 600, ViewportLayout::Single),
            Err(SceneError::DegenerateViewport { width: 0, height: 600 })
        ));
        assert!(setting.resize(1, 600, ViewportLayout::SideBySide).is_err());
        assert_eq!(setting, before);
    }
}
