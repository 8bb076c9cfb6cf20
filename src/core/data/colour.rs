#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a colour from unit-range channels, clamping out-of-range input.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
        }
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    #[must_use]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
