use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::resolution::Resolution;
use crate::error::InvalidParameter;

/// Validated inputs of one escape-time computation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    region: ComplexRect,
    resolution: Resolution,
    iteration_cap: u32,
}

impl MandelbrotParams {
    pub fn new(region: ComplexRect, resolution: Resolution, iteration_cap: u32) -> Result<Self, InvalidParameter> {
        if iteration_cap == 0 {
            return Err(InvalidParameter::ZeroIterationCap);
        }

        Ok(Self {
            region,
            resolution,
            iteration_cap,
        })
    }

    /// Validates raw bounds, resolution and cap in one go.
    pub fn from_raw(
        (xmin, xmax, ymin, ymax): (f64, f64, f64, f64),
        (width, height): (usize, usize),
        iteration_cap: u32,
    ) -> Result<Self, InvalidParameter> {
        let region = ComplexRect::from_bounds(xmin, xmax, ymin, ymax)?;
        let resolution = Resolution::new(width, height)?;

        Self::new(region, resolution, iteration_cap)
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn iteration_cap(&self) -> u32 {
        self.iteration_cap
    }
}
