//! Input adapters for the Mandelbrot plotter.
//!
//! Adapters here receive input from outside the crate and translate it into
//! render requests for the controllers.

pub mod cli;
