use super::EYE_OFFSET_COUNT;
use crate::math::{Vector2, Vector3};

/// An opaque handle to a texture owned by the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Texture offsets of the eye atlas. The atlas is a 2x4 grid of eye expressions, each entry is
/// the offset of one expression in texture space.
const EYE_ATLAS: [Vector2; EYE_OFFSET_COUNT] = [
    Vector2 { x: 0.0, y: 0.0 },
    Vector2 { x: 0.0, y: 0.75 },
    Vector2 { x: 0.0, y: 0.5 },
    Vector2 { x: 0.0, y: 0.25 },
    Vector2 { x: 0.5, y: 0.0 },
    Vector2 { x: 0.5, y: 0.75 },
    Vector2 { x: 0.5, y: 0.5 },
];

/// Phong reflectance of a part of a model.
#[derive(Clone, Debug, PartialEq)]
pub struct PhongMaterial {
    /// Ambient reflectance
    pub ka: Vector3,
    /// Diffuse reflectance
    pub kd: Vector3,
    /// Specular reflectance
    pub ks: Vector3,
    pub diffuse_texture: Option<TextureHandle>,
    /// Whether the diffuse texture is an eye atlas that is scrolled through with the eye offset
    pub is_eye: bool,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self {
            ka: Vector3::splat(1.0),
            kd: Vector3::splat(1.0),
            ks: Vector3::splat(1.0),
            diffuse_texture: None,
            is_eye: false,
        }
    }
}

impl PhongMaterial {
    /// Create a material. Textures whose name contains `Eye` are treated as an eye atlas.
    pub fn new(
        ka: Vector3,
        kd: Vector3,
        ks: Vector3,
        texture_name: &str,
        diffuse_texture: Option<TextureHandle>,
    ) -> Self {
        Self {
            ka,
            kd,
            ks,
            diffuse_texture,
            is_eye: texture_name.contains("Eye"),
        }
    }

    /// The texture coordinate offset for the given eye offset index. Materials that are not an
    /// eye atlas never move.
    pub fn texture_offset(&self, eye_offset: usize) -> Vector2 {
        if self.is_eye {
            EYE_ATLAS[eye_offset % EYE_OFFSET_COUNT]
        } else {
            Vector2::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_textures_are_detected_by_name() {
        let one = Vector3::splat(1.0);
        let eye = PhongMaterial::new(one, one, one, "textures/PokemonEye.png", None);
        let body = PhongMaterial::new(one, one, one, "textures/Body.png", Some(TextureHandle(3)));
        assert!(eye.is_eye);
        assert!(!body.is_eye);
        assert_eq!(eye.texture_offset(1), Vector2::new(0.0, 0.75));
        assert_eq!(eye.texture_offset(6), Vector2::new(0.5, 0.5));
        assert_eq!(body.texture_offset(4), Vector2::zero());
    }
}
