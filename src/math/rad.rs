#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Rad(pub f32);

impl Rad {
    pub fn sin_cos(self) -> (f32, f32) {
        self.0.sin_cos()
    }

    pub fn cot(self) -> f32 {
        1.0 / self.0.tan()
    }
}

impl std::ops::Div<f32> for Rad {
    type Output = Rad;
    fn div(self, other: f32) -> Rad {
        Rad(self.0 / other)
    }
}
