use crate::math::Vector3;
use serde::{Deserialize, Serialize};

/// The three light sources of the scene. Only one of them lights the model at a time.
///
/// For more information, see the tutorial at [https://learnopengl.com/Lighting/Light-casters](https://learnopengl.com/Lighting/Light-casters)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightKind {
    /// Shines in one direction from infinitely far away, e.g. the sun
    Directional,
    /// Shines equally in all directions and fades over distance, e.g. a lightbulb
    Point,
    /// A point light restricted to a cone
    Spot,
}

impl Default for LightKind {
    fn default() -> Self {
        LightKind::Directional
    }
}

impl LightKind {
    /// The next light in the cycle directional -> point -> spot -> directional.
    pub fn next(self) -> Self {
        match self {
            LightKind::Directional => LightKind::Point,
            LightKind::Point => LightKind::Spot,
            LightKind::Spot => LightKind::Directional,
        }
    }

    /// Position of this light in the shader's light array.
    pub fn index(self) -> usize {
        match self {
            LightKind::Directional => 0,
            LightKind::Point => 1,
            LightKind::Spot => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LightKind::Directional => "directional light",
            LightKind::Point => "point light",
            LightKind::Spot => "spot light",
        }
    }
}

/// All parameters of a single light. Attenuation is only used by point and spot lights, the
/// spot fields only by the spot light.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightingAttrib {
    /// Position of the light, or the direction it comes from for the directional light
    pub position: Vector3,
    pub ambient: Vector3,
    pub diffuse: Vector3,
    pub specular: Vector3,
    pub spot_direction: Vector3,
    pub spot_exponent: f32,
    /// Half-angle of the spot cone, in degrees. Always within `[0, 180]`.
    pub spot_cutoff: f32,
    /// Always `>= 0`
    pub shininess: f32,
    pub constant_attenuation: f32,
    pub linear_attenuation: f32,
    pub quadratic_attenuation: f32,
}

impl Default for LightingAttrib {
    fn default() -> Self {
        Self {
            position: Vector3::zero(),
            ambient: Vector3::splat(0.15),
            diffuse: Vector3::splat(1.0),
            specular: Vector3::splat(1.0),
            spot_direction: Vector3::zero(),
            spot_exponent: 0.0,
            spot_cutoff: 0.0,
            shininess: 64.0,
            constant_attenuation: 0.0,
            linear_attenuation: 0.0,
            quadratic_attenuation: 0.0,
        }
    }
}

impl LightingAttrib {
    /// The initial parameters of the given light.
    pub fn initial(kind: LightKind) -> Self {
        match kind {
            LightKind::Directional => Self {
                position: Vector3::new(1.0, 1.0, 1.0),
                ..Self::default()
            },
            LightKind::Point => Self {
                position: Vector3::new(0.0, 2.0, 1.0),
                constant_attenuation: 0.01,
                linear_attenuation: 0.8,
                quadratic_attenuation: 0.1,
                ..Self::default()
            },
            LightKind::Spot => Self {
                position: Vector3::new(0.0, 0.0, 2.0),
                constant_attenuation: 0.05,
                linear_attenuation: 0.3,
                quadratic_attenuation: 0.6,
                spot_direction: Vector3::new(0.0, 0.0, -1.0),
                spot_exponent: 50.0,
                spot_cutoff: 30.0,
                ..Self::default()
            },
        }
    }

    /// Add `amount` to every diffuse component, saturating at zero.
    pub fn add_diffuse(&mut self, amount: f32) {
        self.diffuse = (self.diffuse + Vector3::splat(amount)).memberwise_max(Vector3::zero());
    }

    /// Add `degrees` to the spot cutoff, saturating at `0` and `180`.
    pub fn add_spot_cutoff(&mut self, degrees: f32) {
        self.spot_cutoff = (self.spot_cutoff + degrees).max(0.0).min(180.0);
    }

    /// Add `amount` to the shininess, saturating at zero.
    pub fn add_shininess(&mut self, amount: f32) {
        self.shininess = (self.shininess + amount).max(0.0);
    }
}

/// The state of the lights in the scene: one entry per [LightKind] and the light that is
/// currently active.
///
/// [LightKind]: enum.LightKind.html
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightTable {
    lights: [LightingAttrib; 3],
    active: LightKind,
}

impl Default for LightTable {
    fn default() -> Self {
        Self {
            lights: [
                LightingAttrib::initial(LightKind::Directional),
                LightingAttrib::initial(LightKind::Point),
                LightingAttrib::initial(LightKind::Spot),
            ],
            active: LightKind::Directional,
        }
    }
}

impl LightTable {
    pub fn active(&self) -> LightKind {
        self.active
    }

    /// Activate the next light and return it.
    pub fn cycle(&mut self) -> LightKind {
        self.active = self.active.next();
        self.active
    }

    pub fn get(&self, kind: LightKind) -> &LightingAttrib {
        &self.lights[kind.index()]
    }

    pub fn get_mut(&mut self, kind: LightKind) -> &mut LightingAttrib {
        &mut self.lights[kind.index()]
    }

    pub fn active_light_mut(&mut self) -> &mut LightingAttrib {
        let active = self.active;
        self.get_mut(active)
    }

    /// All lights, in shader order.
    pub fn as_slice(&self) -> &[LightingAttrib] {
        &self.lights
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LightingAttrib> {
        self.lights.iter_mut()
    }
}
