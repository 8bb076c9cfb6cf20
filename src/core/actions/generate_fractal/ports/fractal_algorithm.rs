use crate::core::data::point::Point;
use std::error::Error;

/// Computes one value per grid position.
///
/// Implementations must be pure: the same `pixel` always yields the same
/// result, so drivers are free to evaluate positions in any order.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
