use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::util::linspace::linspace;

/// The complex sample behind every pixel of a region at a given resolution.
///
/// Column `x` samples `real[x]`, row `y` samples `imag[y]`, so row indices grow
/// with the imaginary part. The axes are stored separately; the full grid is
/// their outer sum and is never materialised.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    real: Vec<f64>,
    imag: Vec<f64>,
}

impl SampleGrid {
    #[must_use]
    pub fn new(region: ComplexRect, resolution: Resolution) -> Self {
        Self {
            real: linspace(region.xmin(), region.xmax(), resolution.width()),
            imag: linspace(region.ymin(), region.ymax(), resolution.height()),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.real.len()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.imag.len()
    }

    /// Sample at `point`. Positions past an edge read the edge sample.
    #[must_use]
    pub fn sample(&self, point: Point) -> Complex {
        Complex {
            real: clamped(&self.real, point.x),
            imag: clamped(&self.imag, point.y),
        }
    }

    /// All samples in row-major order.
    pub fn samples(&self) -> impl Iterator<Item = Complex> + '_ {
        self.imag
            .iter()
            .flat_map(move |&imag| self.real.iter().map(move |&real| Complex { real, imag }))
    }
}

// Axes are never empty: a `Resolution` is at least 1x1.
fn clamped(axis: &[f64], index: usize) -> f64 {
    axis[index.min(axis.len() - 1)]
}
