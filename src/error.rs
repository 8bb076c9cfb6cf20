use std::path::PathBuf;

use thiserror::Error;

/// Rejected input, raised before any computation or rendering starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameter {
    #[error("region bounds must be finite: re [{xmin}, {xmax}], im [{ymin}, {ymax}]")]
    NonFiniteBounds {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    },

    #[error("real bounds must satisfy xmin < xmax: got xmin {xmin}, xmax {xmax}")]
    InvertedRealBounds { xmin: f64, xmax: f64 },

    #[error("imaginary bounds must satisfy ymin < ymax: got ymin {ymin}, ymax {ymax}")]
    InvertedImagBounds { ymin: f64, ymax: f64 },

    #[error("resolution must be at least 1x1: got {width}x{height}")]
    InvalidResolution { width: usize, height: usize },

    #[error("iteration cap must be greater than zero")]
    ZeroIterationCap,

    #[error("dots per inch must be greater than zero")]
    ZeroDpi,

    #[error("dots per inch must be at most {max}: got {dpi}")]
    DpiTooLarge { dpi: u32, max: u32 },

    #[error("unknown colour map '{name}' (known: {known})")]
    UnknownColourMap { name: String, known: String },

    #[error("nothing to do: saving is off and no display window is available")]
    NoRenderTarget,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameter),

    #[error("failed to write image to {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to display figure: {reason}")]
    Display { reason: String },
}
