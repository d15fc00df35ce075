use super::Rad;

/// An angle in degrees. Model rotations and the field of view are stored in degrees.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Deg(pub f32);

impl Into<Rad> for Deg {
    fn into(self) -> Rad {
        Rad(self.0 * std::f32::consts::PI / 180.0)
    }
}
