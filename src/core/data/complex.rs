use std::ops::{Add, Mul};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Euclidean magnitude `|z|`, computed without intermediate overflow.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    #[must_use]
    pub fn square(self) -> Self {
        self * self
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_of_three_four() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Complex::new(-3.0, -4.0).magnitude(), 5.0);
    }

    #[test]
    fn test_magnitude_zero() {
        assert_eq!(Complex::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_magnitude_on_escape_radius_is_exact() {
        assert_eq!(Complex::new(-2.0, 0.0).magnitude(), 2.0);
        assert_eq!(Complex::new(0.0, 2.0).magnitude(), 2.0);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(4.0, 6.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i - 9 = -5 + 12i
        assert_eq!(Complex::new(2.0, 3.0).square(), Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::new(1.0, -1.0).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }
}
