use std::convert::Infallible;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

/// Any orbit whose magnitude exceeds this radius diverges.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Iteration (1-based) at which the orbit of `c` first leaves the escape radius,
/// or `iteration_cap` when it stays inside for every iteration.
#[must_use]
pub fn escape_time(c: Complex, iteration_cap: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 1..=iteration_cap {
        z = z.square() + c;
        if z.magnitude() > ESCAPE_RADIUS {
            return iteration;
        }
    }

    iteration_cap
}

/// Per-pixel escape-time evaluation over a fixed sample grid.
#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    grid: SampleGrid,
    iteration_cap: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        Ok(escape_time(self.grid.sample(pixel), self.iteration_cap))
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(params: &MandelbrotParams) -> Self {
        Self {
            grid: SampleGrid::new(params.region(), params.resolution()),
            iteration_cap: params.iteration_cap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for cap in [1, 2, 10, 300] {
            assert_eq!(escape_time(Complex::ZERO, cap), cap);
        }
    }

    #[test]
    fn test_three_escapes_on_first_iteration() {
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 1), 1);
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 100), 1);
    }

    #[test]
    fn test_minus_two_sits_on_the_radius_and_never_escapes() {
        // -2 -> 2 -> 2 -> ...; |z| == 2 is not an escape
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 50), 50);
    }

    #[test]
    fn test_one_escapes_on_third_iteration() {
        // 1 -> 2 -> 5
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 10), 3);
    }

    #[test]
    fn test_escape_at_cap_equals_cap() {
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 3), 3);
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 2), 2);
    }

    #[test]
    fn test_compute_reads_grid_sample() {
        let params = MandelbrotParams::from_raw((-2.0, 1.0, -1.25, 1.25), (3, 3), 5).unwrap();
        let algorithm = MandelbrotAlgorithm::new(&params);

        // c = 1 + 0i
        assert_eq!(algorithm.compute(Point { x: 2, y: 1 }), Ok(3));
        // c = -2 - 1.25i
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), Ok(1));
    }

    #[test]
    fn test_compute_past_the_edge_reads_edge_sample() {
        let params = MandelbrotParams::from_raw((-2.0, 1.0, -1.25, 1.25), (3, 3), 5).unwrap();
        let algorithm = MandelbrotAlgorithm::new(&params);

        assert_eq!(
            algorithm.compute(Point { x: 7, y: 1 }),
            algorithm.compute(Point { x: 2, y: 1 })
        );
    }
}
