use crate::core::data::complex::Complex;
use crate::error::InvalidParameter;

/// Axis-aligned region of the complex plane, `min` at the lower-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, InvalidParameter> {
        if !min.is_finite() || !max.is_finite() {
            return Err(InvalidParameter::NonFiniteBounds {
                xmin: min.real,
                xmax: max.real,
                ymin: min.imag,
                ymax: max.imag,
            });
        }

        if min.real >= max.real {
            return Err(InvalidParameter::InvertedRealBounds {
                xmin: min.real,
                xmax: max.real,
            });
        }

        if min.imag >= max.imag {
            return Err(InvalidParameter::InvertedImagBounds {
                ymin: min.imag,
                ymax: max.imag,
            });
        }

        Ok(Self { min, max })
    }

    /// Skips validation; only for regions known to be ordered and finite.
    pub(crate) const fn new_unchecked(min: Complex, max: Complex) -> Self {
        Self { min, max }
    }

    pub fn from_bounds(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, InvalidParameter> {
        Self::new(Complex::new(xmin, ymin), Complex::new(xmax, ymax))
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.min.real
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.max.real
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.min.imag
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.max.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    /// `(xmin, xmax, ymin, ymax)`, the order used for axis extents.
    #[must_use]
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        (self.xmin(), self.xmax(), self.ymin(), self.ymax())
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.min.real <= point.real
            && self.min.imag <= point.imag
            && self.max.real >= point.real
            && self.max.imag >= point.imag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_from_bounds_valid() {
        let rect = ComplexRect::from_bounds(-2.0, 1.0, -1.25, 1.25).unwrap();

        assert_eq!(rect.extent(), (-2.0, 1.0, -1.25, 1.25));
        assert_eq!(rect.width(), 3.0);
        assert_eq!(rect.height(), 2.5);
    }

    #[test]
    fn test_complex_rect_rejects_inverted_or_empty_real_bounds() {
        assert_eq!(
            ComplexRect::from_bounds(1.0, -2.0, -1.0, 1.0),
            Err(InvalidParameter::InvertedRealBounds {
                xmin: 1.0,
                xmax: -2.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(0.5, 0.5, -1.0, 1.0),
            Err(InvalidParameter::InvertedRealBounds {
                xmin: 0.5,
                xmax: 0.5
            })
        );
    }

    #[test]
    fn test_complex_rect_rejects_inverted_or_empty_imag_bounds() {
        assert_eq!(
            ComplexRect::from_bounds(-2.0, 1.0, 1.0, -1.0),
            Err(InvalidParameter::InvertedImagBounds {
                ymin: 1.0,
                ymax: -1.0
            })
        );
        assert_eq!(
            ComplexRect::from_bounds(-2.0, 1.0, 0.0, 0.0),
            Err(InvalidParameter::InvertedImagBounds {
                ymin: 0.0,
                ymax: 0.0
            })
        );
    }

    #[test]
    fn test_complex_rect_rejects_non_finite_bounds() {
        let nan = ComplexRect::from_bounds(f64::NAN, 1.0, -1.0, 1.0);
        let inf = ComplexRect::from_bounds(-2.0, f64::INFINITY, -1.0, 1.0);

        assert!(matches!(nan, Err(InvalidParameter::NonFiniteBounds { .. })));
        assert!(matches!(inf, Err(InvalidParameter::NonFiniteBounds { .. })));
    }

    #[test]
    fn test_complex_rect_contains_point() {
        let rect = ComplexRect::from_bounds(-10.0, 100.0, -5.0, 200.0).unwrap();

        assert!(rect.contains_point(Complex::new(50.0, 50.0)));
        assert!(rect.contains_point(Complex::new(-10.0, -5.0)));
        assert!(rect.contains_point(Complex::new(100.0, 200.0)));
        assert!(!rect.contains_point(Complex::new(101.0, 50.0)));
        assert!(!rect.contains_point(Complex::new(50.0, -6.0)));
    }
}
