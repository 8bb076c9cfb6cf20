use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::resolution::Resolution;

/// Evaluates `algorithm` over every grid position, row by row, on the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    resolution: Resolution,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    resolution
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
