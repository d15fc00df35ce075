use crate::{
    camera::Camera,
    config::{InputSensitivity, SceneConfig},
    lights::{LightKind, LightTable},
    math::{rotate, scaling, translate, Matrix4, Vector2},
    model::{ModelData, Shape},
    projection::{ProjectionMode, ProjectionSetting, ViewportLayout},
    SceneError,
};

/// Selects what dragging the mouse and scrolling edits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransformMode {
    /// Move the active model
    GeoTranslation,
    /// Rotate the active model
    GeoRotation,
    /// Scale the active model
    GeoScaling,
    /// Move the point the camera looks at
    ViewCenter,
    /// Move the camera
    ViewEye,
    /// Tilt the camera's up vector
    ViewUp,
    /// Move the active light, and change its diffuse intensity or spot cutoff
    LightEdit,
    /// Change the shininess of all lights
    ShininessEdit,
    /// Ignore dragging and scrolling
    None,
}

impl Default for TransformMode {
    fn default() -> Self {
        TransformMode::GeoTranslation
    }
}

/// Texture magnification filter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MagFilter {
    Nearest,
    Linear,
}

/// Texture minification filter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MinFilter {
    Nearest,
    LinearMipmapLinear,
}

/// The filters the renderer should sample the model textures with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextureFiltering {
    pub mag: MagFilter,
    pub min: MinFilter,
}

impl Default for TextureFiltering {
    fn default() -> Self {
        Self {
            mag: MagFilter::Nearest,
            min: MinFilter::Nearest,
        }
    }
}

impl TextureFiltering {
    pub fn toggle_mag(&mut self) {
        self.mag = match self.mag {
            MagFilter::Nearest => MagFilter::Linear,
            MagFilter::Linear => MagFilter::Nearest,
        };
    }

    pub fn toggle_min(&mut self) {
        self.min = match self.min {
            MinFilter::Nearest => MinFilter::LinearMipmapLinear,
            MinFilter::LinearMipmapLinear => MinFilter::Nearest,
        };
    }
}

/// Whether models are drawn filled or as wireframes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonMode {
    Solid,
    Wireframe,
}

impl Default for PolygonMode {
    fn default() -> Self {
        PolygonMode::Solid
    }
}

/// A discrete action, usually triggered by a single key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    NextModel,
    PreviousModel,
    SetTransformMode(TransformMode),
    SetProjection(ProjectionMode),
    CycleLight,
    ToggleMagFilter,
    ToggleMinFilter,
    ToggleWireframe,
    NextEyeOffset,
    PreviousEyeOffset,
    /// Log the matrices of the active model, the view and the projection
    PrintInfo,
    Exit,
}

/// What the event loop should do after a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Continue,
    Exit,
}

/// Everything the renderer uploads for one frame.
#[derive(Debug)]
pub struct FrameUniforms<'a> {
    pub model: Matrix4,
    pub view: Matrix4,
    pub projection: Matrix4,
    pub lights: &'a LightTable,
    pub shapes: &'a [Shape],
    pub eye_offset: usize,
    pub filtering: TextureFiltering,
    pub polygon_mode: PolygonMode,
    pub layout: ViewportLayout,
}

/// The complete interactive state of the viewer.
///
/// The view and projection matrices are cached and kept in sync with the camera and projection
/// settings: every method that changes those recomputes the matrix before it returns. When the
/// new input is degenerate the change is rolled back and the error is returned, so the cached
/// matrices are always finite.
///
/// The model matrix is not cached, it is rebuilt from the active model every frame.
#[derive(Debug)]
pub struct SceneState {
    models: Vec<ModelData>,
    active_model: usize,
    camera: Camera,
    view: Matrix4,
    projection_setting: ProjectionSetting,
    projection_mode: ProjectionMode,
    layout: ViewportLayout,
    projection: Matrix4,
    transform_mode: TransformMode,
    /// The state of the lights in the scene.
    pub lights: LightTable,
    filtering: TextureFiltering,
    polygon_mode: PolygonMode,
    sensitivity: InputSensitivity,
}

impl SceneState {
    /// Create the scene. The first model is active.
    pub fn new(config: SceneConfig, models: Vec<ModelData>) -> Result<Self, SceneError> {
        if models.is_empty() {
            return Err(SceneError::NoModels);
        }
        let view = config.camera.view_matrix()?;
        let projection = config
            .projection
            .matrix(config.projection_mode, config.layout)?;

        Ok(Self {
            models,
            active_model: 0,
            camera: config.camera,
            view,
            projection_setting: config.projection,
            projection_mode: config.projection_mode,
            layout: config.layout,
            projection,
            transform_mode: TransformMode::default(),
            lights: LightTable::default(),
            filtering: TextureFiltering::default(),
            polygon_mode: PolygonMode::default(),
            sensitivity: config.sensitivity,
        })
    }

    pub fn models(&self) -> &[ModelData] {
        &self.models
    }

    pub fn active_model_index(&self) -> usize {
        self.active_model
    }

    pub fn active_model(&self) -> &ModelData {
        &self.models[self.active_model]
    }

    pub fn active_model_mut(&mut self) -> &mut ModelData {
        &mut self.models[self.active_model]
    }

    /// Select the next model, wrapping around to the first.
    pub fn next_model(&mut self) {
        self.active_model = (self.active_model + 1) % self.models.len();
    }

    /// Select the previous model, wrapping around to the last.
    pub fn previous_model(&mut self) {
        let count = self.models.len();
        self.active_model = (self.active_model + count - 1) % count;
    }

    /// The model matrix of the active model.
    pub fn model_matrix(&self) -> Matrix4 {
        self.active_model().matrix()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn view_matrix(&self) -> Matrix4 {
        self.view
    }

    /// Replace the camera and recompute the view matrix.
    pub fn set_camera(&mut self, camera: Camera) -> Result<(), SceneError> {
        self.update_camera(|c| *c = camera)
    }

    fn update_camera(&mut self, edit: impl FnOnce(&mut Camera)) -> Result<(), SceneError> {
        let mut camera = self.camera;
        edit(&mut camera);
        match camera.view_matrix() {
            Ok(view) => {
                self.camera = camera;
                self.view = view;
                log::debug!(
                    "Camera eye {:?}, center {:?}, up {:?}",
                    camera.position,
                    camera.center,
                    camera.up_vector
                );
                Ok(())
            }
            Err(e) => {
                log::warn!("Ignoring camera update: {}", e);
                Err(e)
            }
        }
    }

    pub fn projection_setting(&self) -> &ProjectionSetting {
        &self.projection_setting
    }

    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    pub fn layout(&self) -> ViewportLayout {
        self.layout
    }

    pub fn projection_matrix(&self) -> Matrix4 {
        self.projection
    }

    /// Replace the projection settings and recompute the active projection.
    pub fn set_projection_setting(&mut self, setting: ProjectionSetting) -> Result<(), SceneError> {
        self.update_projection(self.projection_mode, |s| {
            *s = setting;
            Ok(())
        })
    }

    /// Switch between orthogonal and perspective projection.
    pub fn set_projection_mode(&mut self, mode: ProjectionMode) -> Result<(), SceneError> {
        self.update_projection(mode, |_| Ok(()))?;
        log::info!("Projection: {:?}", mode);
        Ok(())
    }

    fn update_projection(
        &mut self,
        mode: ProjectionMode,
        edit: impl FnOnce(&mut ProjectionSetting) -> Result<(), SceneError>,
    ) -> Result<(), SceneError> {
        let mut setting = self.projection_setting;
        let result = edit(&mut setting).and_then(|_| setting.matrix(mode, self.layout));
        match result {
            Ok(projection) => {
                self.projection_setting = setting;
                self.projection_mode = mode;
                self.projection = projection;
                Ok(())
            }
            Err(e) => {
                log::warn!("Ignoring projection update: {}", e);
                Err(e)
            }
        }
    }

    /// React to a new window size: update the aspect ratio and orthogonal bounds, and rebuild
    /// the active projection.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SceneError> {
        let layout = self.layout;
        self.update_projection(self.projection_mode, |s| s.resize(width, height, layout))
    }

    pub fn transform_mode(&self) -> TransformMode {
        self.transform_mode
    }

    pub fn set_transform_mode(&mut self, mode: TransformMode) {
        self.transform_mode = mode;
    }

    pub fn filtering(&self) -> TextureFiltering {
        self.filtering
    }

    pub fn polygon_mode(&self) -> PolygonMode {
        self.polygon_mode
    }

    pub fn sensitivity(&self) -> &InputSensitivity {
        &self.sensitivity
    }

    /// Execute a discrete command.
    pub fn apply(&mut self, command: Command) -> Result<Response, SceneError> {
        match command {
            Command::NextModel => self.next_model(),
            Command::PreviousModel => self.previous_model(),
            Command::SetTransformMode(mode) => self.set_transform_mode(mode),
            Command::SetProjection(mode) => self.set_projection_mode(mode)?,
            Command::CycleLight => {
                let kind = self.lights.cycle();
                log::info!("Current light source: {}", kind.name());
            }
            Command::ToggleMagFilter => self.filtering.toggle_mag(),
            Command::ToggleMinFilter => self.filtering.toggle_min(),
            Command::ToggleWireframe => {
                self.polygon_mode = match self.polygon_mode {
                    PolygonMode::Solid => PolygonMode::Wireframe,
                    PolygonMode::Wireframe => PolygonMode::Solid,
                }
            }
            Command::NextEyeOffset => {
                self.models.iter_mut().for_each(ModelData::next_eye_offset);
                log::info!("Eye offset: {}", self.active_model().eye_offset());
            }
            Command::PreviousEyeOffset => {
                self.models
                    .iter_mut()
                    .for_each(ModelData::previous_eye_offset);
                log::info!("Eye offset: {}", self.active_model().eye_offset());
            }
            Command::PrintInfo => log::info!("\n{}", self.info()),
            Command::Exit => return Ok(Response::Exit),
        }
        Ok(Response::Continue)
    }

    /// Apply a cursor movement made while the left mouse button is held.
    ///
    /// `delta` is in window pixels with Y growing downwards, so dragging up gives a negative
    /// `delta.y`.
    pub fn drag(&mut self, delta: Vector2) -> Result<(), SceneError> {
        let s = self.sensitivity;
        let (dx, dy) = (delta.x, delta.y);
        match self.transform_mode {
            TransformMode::GeoTranslation => {
                let model = self.active_model_mut();
                model.position.x += dx * s.translate;
                model.position.y -= dy * s.translate;
            }
            TransformMode::GeoScaling => {
                let model = self.active_model_mut();
                model.scale.x += dx * s.scale;
                model.scale.y -= dy * s.scale;
            }
            TransformMode::GeoRotation => {
                let model = self.active_model_mut();
                model.rotation.x -= dy * s.rotate;
                model.rotation.y -= dx * s.rotate;
            }
            TransformMode::ViewEye => self.update_camera(|c| {
                c.position.x -= dx * s.eye;
                c.position.y += dy * s.eye;
            })?,
            TransformMode::ViewCenter => self.update_camera(|c| {
                c.center.x -= dx * s.center;
                c.center.y -= dy * s.center;
            })?,
            TransformMode::ViewUp => self.update_camera(|c| {
                c.up_vector.x -= dx * s.up;
                c.up_vector.y -= dy * s.up;
            })?,
            TransformMode::LightEdit => {
                let light = self.lights.active_light_mut();
                light.position.x += dx * s.light;
                light.position.y -= dy * s.light;
            }
            TransformMode::ShininessEdit | TransformMode::None => {}
        }
        Ok(())
    }

    /// Apply a vertical scroll. Positive `y_offset` means scrolling up.
    pub fn scroll(&mut self, y_offset: f32) -> Result<(), SceneError> {
        let s = self.sensitivity;
        match self.transform_mode {
            TransformMode::GeoTranslation => {
                self.active_model_mut().position.z += y_offset * s.translate_scroll
            }
            TransformMode::GeoScaling => {
                self.active_model_mut().scale.z += y_offset * s.scale_scroll
            }
            TransformMode::GeoRotation => {
                self.active_model_mut().rotation.z += y_offset * s.rotate_scroll
            }
            TransformMode::ViewEye => {
                self.update_camera(|c| c.position.z -= y_offset * s.eye_scroll)?
            }
            TransformMode::ViewCenter => {
                self.update_camera(|c| c.center.z += y_offset * s.center_scroll)?
            }
            TransformMode::ViewUp => {
                self.update_camera(|c| c.up_vector.z += y_offset * s.up_scroll)?
            }
            TransformMode::LightEdit => {
                let kind = self.lights.active();
                let light = self.lights.active_light_mut();
                match kind {
                    LightKind::Directional | LightKind::Point => {
                        light.add_diffuse(y_offset * s.diffuse_scroll)
                    }
                    LightKind::Spot => light.add_spot_cutoff(y_offset * s.cutoff_scroll),
                }
            }
            TransformMode::ShininessEdit => {
                for light in self.lights.iter_mut() {
                    light.add_shininess(y_offset * s.shininess_scroll);
                }
            }
            TransformMode::None => {}
        }
        Ok(())
    }

    /// A human readable dump of the matrices of the active model, the view and the projection.
    pub fn info(&self) -> String {
        let model = self.active_model();
        let sections = [
            ("Translation Matrix of the Current Model", translate(model.position)),
            ("Rotation Matrix of the Current Model", rotate(model.rotation)),
            ("Scaling Matrix of the Current Model", scaling(model.scale)),
            ("Viewing Matrix", self.view),
            ("Projection Matrix", self.projection),
        ];
        sections
            .iter()
            .map(|(title, matrix)| format!("{}:\n{}\n", title, matrix))
            .collect()
    }

    /// Collect what the renderer needs for the current frame.
    pub fn frame_uniforms(&self) -> FrameUniforms<'_> {
        let model = self.active_model();
        FrameUniforms {
            model: model.matrix(),
            view: self.view,
            projection: self.projection,
            lights: &self.lights,
            shapes: &model.shapes,
            eye_offset: model.eye_offset(),
            filtering: self.filtering,
            polygon_mode: self.polygon_mode,
            layout: self.layout,
        }
    }
}
