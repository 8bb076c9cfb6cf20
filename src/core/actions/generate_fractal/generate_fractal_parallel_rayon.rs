use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work. Results come back in the same row-major order as
/// [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_parallel_rayon<Alg>(
    resolution: Resolution,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = resolution.width();

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..resolution.height())
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect()
        })
        .collect();

    rows.map(|rows| rows.into_iter().flatten().collect())
}
