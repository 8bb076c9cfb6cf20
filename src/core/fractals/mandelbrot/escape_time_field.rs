use tracing::{debug, trace};

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::data::complex::Complex;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::mandelbrot::algorithm::{ESCAPE_RADIUS, MandelbrotAlgorithm};
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::error::InvalidParameter;

/// Escape-time field over `params`, advancing every still-active pixel in bulk.
///
/// Each pass applies `z <- z² + c` to the pixels that have not escaped yet and
/// retires those whose `|z|` exceeds the escape radius, recording the pass
/// number. A retired pixel is never touched again. Iteration stops early once
/// no pixel is active; pixels still active after the last pass get the cap.
#[must_use]
pub fn compute(params: &MandelbrotParams) -> EscapeField {
    let iteration_cap = params.iteration_cap();
    let grid = SampleGrid::new(params.region(), params.resolution());
    let samples: Vec<Complex> = grid.samples().collect();

    let mut orbits = vec![Complex::ZERO; samples.len()];
    let mut escaped_at: Vec<Option<u32>> = vec![None; samples.len()];
    let mut active: Vec<usize> = (0..samples.len()).collect();

    debug!(
        width = grid.width(),
        height = grid.height(),
        iteration_cap,
        "computing escape-time field"
    );

    for iteration in 1..=iteration_cap {
        active.retain(|&index| {
            let z = orbits[index].square() + samples[index];
            orbits[index] = z;

            if z.magnitude() > ESCAPE_RADIUS {
                escaped_at[index] = Some(iteration);
                return false;
            }

            true
        });

        if active.is_empty() {
            trace!(iteration, "every pixel escaped");
            break;
        }
    }

    let values = escaped_at
        .into_iter()
        .map(|escaped| escaped.unwrap_or(iteration_cap))
        .collect();

    EscapeField::from_values(params.resolution(), iteration_cap, values)
}

/// Same field as [`compute`], evaluating each pixel to completion in turn.
#[must_use]
pub fn compute_per_pixel(params: &MandelbrotParams) -> EscapeField {
    let algorithm = MandelbrotAlgorithm::new(params);
    let Ok(values) = generate_fractal(params.resolution(), &algorithm);

    EscapeField::from_values(params.resolution(), params.iteration_cap(), values)
}

/// Same field as [`compute`], with rows spread over the rayon thread pool.
#[must_use]
pub fn compute_parallel(params: &MandelbrotParams) -> EscapeField {
    let algorithm = MandelbrotAlgorithm::new(params);
    let Ok(values) = generate_fractal_parallel_rayon(params.resolution(), &algorithm);

    EscapeField::from_values(params.resolution(), params.iteration_cap(), values)
}

/// Validates raw inputs and computes the escape-time field.
pub fn mandelbrot(
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    width: usize,
    height: usize,
    max_iter: u32,
) -> Result<EscapeField, InvalidParameter> {
    let params = MandelbrotParams::from_raw((xmin, xmax, ymin, ymax), (width, height), max_iter)?;

    Ok(compute(&params))
}
