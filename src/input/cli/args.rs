use std::path::PathBuf;

use clap::Parser;

use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_OUTPUT, DEFAULT_REGION, DEFAULT_RESOLUTION, MandelbrotConfig, PlotTitle,
};
use crate::error::InvalidParameter;
use crate::presenters::raster::figure::{DEFAULT_COLOUR_MAP, DEFAULT_DPI};

/// Render the Mandelbrot set escape-time field as an annotated heat map
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "mandelbrot_plot", version, long_about = None)]
pub struct CliArgs {
    /// Lower bound of the real axis
    #[arg(long, default_value_t = DEFAULT_REGION.xmin(), allow_negative_numbers = true)]
    pub xmin: f64,

    /// Upper bound of the real axis
    #[arg(long, default_value_t = DEFAULT_REGION.xmax(), allow_negative_numbers = true)]
    pub xmax: f64,

    /// Lower bound of the imaginary axis
    #[arg(long, default_value_t = DEFAULT_REGION.ymin(), allow_negative_numbers = true)]
    pub ymin: f64,

    /// Upper bound of the imaginary axis
    #[arg(long, default_value_t = DEFAULT_REGION.ymax(), allow_negative_numbers = true)]
    pub ymax: f64,

    /// Sample columns
    #[arg(long, default_value_t = DEFAULT_RESOLUTION.width())]
    pub width: usize,

    /// Sample rows
    #[arg(long, default_value_t = DEFAULT_RESOLUTION.height())]
    pub height: usize,

    /// Iteration cap; pixels that never escape get this value
    #[arg(long = "max-iter", default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iter: u32,

    /// Colour map name, `_r` suffix reverses it (magma, inferno, viridis, hot, gray, fire, blue_white)
    #[arg(long, default_value = DEFAULT_COLOUR_MAP)]
    pub cmap: String,

    /// Plot title [default: "Mandelbrot set (WxH, iter=N)"]
    #[arg(long, conflicts_with = "no_title")]
    pub title: Option<String>,

    /// Leave the title out
    #[arg(long)]
    pub no_title: bool,

    /// Output image; the extension picks the format
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Render without writing a file
    #[arg(long)]
    pub no_save: bool,

    /// Skip the preview window (shown only in builds with the `gui` feature)
    #[arg(long)]
    pub no_show: bool,

    /// Spread rows over all cores
    #[arg(long)]
    pub parallel: bool,

    /// Output dots per inch for the 10x7 inch figure
    #[arg(long, default_value_t = DEFAULT_DPI)]
    pub dpi: u32,
}

impl CliArgs {
    pub fn into_config(self) -> Result<MandelbrotConfig, InvalidParameter> {
        Ok(MandelbrotConfig {
            region: ComplexRect::from_bounds(self.xmin, self.xmax, self.ymin, self.ymax)?,
            resolution: Resolution::new(self.width, self.height)?,
            max_iterations: self.max_iter,
            colour_map: self.cmap,
            title: match (self.title, self.no_title) {
                (_, true) => PlotTitle::Hidden,
                (Some(text), false) => PlotTitle::Text(text),
                (None, false) => PlotTitle::Generated,
            },
            output: (!self.no_save).then_some(self.output),
            parallel: self.parallel,
            dpi: self.dpi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("mandelbrot_plot").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_flags_gives_default_config() {
        let config = parse(&[]).into_config().unwrap();

        assert_eq!(config, MandelbrotConfig::default());
    }

    #[test]
    fn test_negative_bounds_and_sizes() {
        let config = parse(&[
            "--xmin", "-0.8", "--xmax", "-0.7", "--ymin", "0.05", "--ymax", "0.15", "--width", "320",
            "--height", "240", "--max-iter", "500",
        ])
        .into_config()
        .unwrap();

        assert_eq!(config.region.extent(), (-0.8, -0.7, 0.05, 0.15));
        assert_eq!(config.resolution, Resolution::new(320, 240).unwrap());
        assert_eq!(config.max_iterations, 500);
    }

    #[test]
    fn test_no_save_clears_output() {
        let config = parse(&["--no-save", "--output", "ignored.png"]).into_config().unwrap();

        assert_eq!(config.output, None);
    }

    #[test]
    fn test_render_flags() {
        let config = parse(&["--cmap", "hot_r", "--title", "Zoom", "--parallel", "--dpi", "72", "-o", "zoom.jpg"])
            .into_config()
            .unwrap();

        assert_eq!(config.colour_map, "hot_r");
        assert_eq!(config.title, PlotTitle::Text("Zoom".to_string()));
        assert!(config.parallel);
        assert_eq!(config.dpi, 72);
        assert_eq!(config.output, Some(PathBuf::from("zoom.jpg")));
    }

    #[test]
    fn test_no_title_hides_title() {
        let config = parse(&["--no-title"]).into_config().unwrap();

        assert_eq!(config.title, PlotTitle::Hidden);
        assert_eq!(config.raster_options().title, None);
    }

    #[test]
    fn test_title_and_no_title_conflict() {
        let result = CliArgs::try_parse_from(["mandelbrot_plot", "--title", "Zoom", "--no-title"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let result = parse(&["--xmin", "1", "--xmax", "-2"]).into_config();

        assert!(matches!(result, Err(InvalidParameter::InvertedRealBounds { .. })));
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let result = parse(&["--width", "0"]).into_config();

        assert_eq!(
            result,
            Err(InvalidParameter::InvalidResolution { width: 0, height: 1000 })
        );
    }
}
