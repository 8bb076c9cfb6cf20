use std::path::PathBuf;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use crate::error::InvalidParameter;
use crate::presenters::raster::figure::{DEFAULT_COLOUR_MAP, DEFAULT_DPI, RasterOptions};

pub const DEFAULT_REGION: ComplexRect =
    ComplexRect::new_unchecked(Complex::new(-2.0, -1.25), Complex::new(1.0, 1.25));
pub const DEFAULT_RESOLUTION: Resolution = Resolution::new_unchecked(1200, 1000);
pub const DEFAULT_MAX_ITERATIONS: u32 = 300;
pub const DEFAULT_OUTPUT: &str = "mandelbrot.png";

/// What goes above the plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PlotTitle {
    /// `Mandelbrot set (WxH, iter=N)`.
    #[default]
    Generated,
    Text(String),
    Hidden,
}

/// One full render: what to compute, how to draw it and where to put it.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotConfig {
    pub region: ComplexRect,
    pub resolution: Resolution,
    pub max_iterations: u32,
    pub colour_map: String,
    pub title: PlotTitle,
    /// `None` skips saving.
    pub output: Option<PathBuf>,
    pub parallel: bool,
    pub dpi: u32,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION,
            resolution: DEFAULT_RESOLUTION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map: DEFAULT_COLOUR_MAP.to_string(),
            title: PlotTitle::Generated,
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
            parallel: false,
            dpi: DEFAULT_DPI,
        }
    }
}

impl MandelbrotConfig {
    pub fn params(&self) -> Result<MandelbrotParams, InvalidParameter> {
        MandelbrotParams::new(self.region, self.resolution, self.max_iterations)
    }

    #[must_use]
    pub fn default_title(&self) -> String {
        format!(
            "Mandelbrot set ({}x{}, iter={})",
            self.resolution.width(),
            self.resolution.height(),
            self.max_iterations
        )
    }

    #[must_use]
    pub fn raster_options(&self) -> RasterOptions {
        let options = RasterOptions::new(self.region)
            .with_colour_map(self.colour_map.clone())
            .with_dpi(self.dpi);

        match &self.title {
            PlotTitle::Generated => options.with_title(self.default_title()),
            PlotTitle::Text(text) => options.with_title(text.clone()),
            PlotTitle::Hidden => options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_view() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.region.extent(), (-2.0, 1.0, -1.25, 1.25));
        assert_eq!((config.resolution.width(), config.resolution.height()), (1200, 1000));
        assert_eq!(config.max_iterations, 300);
        assert_eq!(config.colour_map, "magma");
        assert_eq!(config.output, Some(PathBuf::from("mandelbrot.png")));
        assert!(!config.parallel);
        assert_eq!(config.dpi, 300);
    }

    #[test]
    fn test_default_constants_pass_validation() {
        assert_eq!(ComplexRect::from_bounds(-2.0, 1.0, -1.25, 1.25), Ok(DEFAULT_REGION));
        assert_eq!(Resolution::new(1200, 1000), Ok(DEFAULT_RESOLUTION));
    }

    #[test]
    fn test_default_title_describes_render() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.default_title(), "Mandelbrot set (1200x1000, iter=300)");
        assert_eq!(
            config.raster_options().title.as_deref(),
            Some("Mandelbrot set (1200x1000, iter=300)")
        );
    }

    #[test]
    fn test_explicit_title_wins() {
        let config = MandelbrotConfig {
            title: PlotTitle::Text("Seahorse valley".to_string()),
            ..MandelbrotConfig::default()
        };

        assert_eq!(config.raster_options().title.as_deref(), Some("Seahorse valley"));
    }

    #[test]
    fn test_hidden_title_leaves_title_out() {
        let config = MandelbrotConfig {
            title: PlotTitle::Hidden,
            ..MandelbrotConfig::default()
        };

        assert_eq!(config.raster_options().title, None);
    }

    #[test]
    fn test_params_rejects_zero_iterations() {
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..MandelbrotConfig::default()
        };

        assert_eq!(config.params(), Err(InvalidParameter::ZeroIterationCap));
    }
}
