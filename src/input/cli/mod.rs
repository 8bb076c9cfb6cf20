//! Command-line input: flags parsed with clap into a [`MandelbrotConfig`].
//!
//! [`MandelbrotConfig`]: crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig

pub mod args;
pub mod run_cli;
