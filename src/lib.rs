mod controllers;
mod core;
mod error;
mod input;
mod presenters;

pub use crate::controllers::mandelbrot::{MandelbrotController, RenderOutcome};
pub use crate::controllers::ports::display_presenter::DisplayPresenterPort;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::generate_pixel_buffer::normalize::Normalize;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::ComplexRect;
pub use crate::core::data::escape_field::EscapeField;
pub use crate::core::data::resolution::Resolution;
pub use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
pub use crate::core::fractals::mandelbrot::colour_maps::factory::colour_map_by_name;
pub use crate::core::fractals::mandelbrot::colour_maps::kinds::{ColourMapKind, ColourMapSelection};
pub use crate::core::fractals::mandelbrot::escape_time_field::{compute, compute_parallel, compute_per_pixel, mandelbrot};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, PlotTitle};
pub use crate::core::fractals::mandelbrot::params::MandelbrotParams;
pub use crate::error::{Error, InvalidParameter};
pub use crate::input::cli::args::CliArgs;
pub use crate::input::cli::run_cli::RunCliCommand;
pub use crate::presenters::file::image_file::ImageFilePresenter;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::presenter::PixelsPresenter;
pub use crate::presenters::raster::figure::{Figure, MAX_DPI, RasterOptions, rasterize};
