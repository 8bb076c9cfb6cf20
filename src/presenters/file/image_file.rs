use std::path::{Path, PathBuf};

use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::error::Error;
use crate::presenters::raster::figure::Figure;

/// Saves figures through the `image` crate, picking the encoder from the
/// file extension (`png`, `jpg`, `bmp`, `ppm`, `tiff`).
#[derive(Debug, Default)]
pub struct ImageFilePresenter {}

impl ImageFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for ImageFilePresenter {
    fn present(&self, figure: &Figure, filepath: &Path) -> Result<PathBuf, Error> {
        let output_write = |source| Error::OutputWrite {
            path: filepath.to_path_buf(),
            source,
        };

        let format = image::ImageFormat::from_path(filepath).map_err(output_write)?;
        figure
            .image()
            .save_with_format(filepath, format)
            .map_err(output_write)?;

        let (width, height) = figure.dimensions();
        info!(path = %filepath.display(), ?format, width, height, "saved figure");

        Ok(filepath.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::fractals::mandelbrot::escape_time_field::mandelbrot;
    use crate::presenters::raster::figure::{RasterOptions, rasterize};

    fn figure() -> Figure {
        let field = mandelbrot(-2.0, 1.0, -1.25, 1.25, 12, 10, 20).unwrap();
        let extent = ComplexRect::from_bounds(-2.0, 1.0, -1.25, 1.25).unwrap();

        rasterize(&field, &RasterOptions::new(extent).with_dpi(20)).unwrap()
    }

    #[test]
    fn test_present_writes_png_that_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let figure = figure();

        let saved = ImageFilePresenter::new().present(&figure, &path).unwrap();

        assert_eq!(saved, path);
        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), figure.dimensions());
    }

    #[test]
    fn test_present_picks_format_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.bmp");

        ImageFilePresenter::new().present(&figure(), &path).unwrap();

        let format = image::ImageReader::open(&path)
            .unwrap()
            .with_guessed_format()
            .unwrap()
            .format();
        assert_eq!(format, Some(image::ImageFormat::Bmp));
    }

    #[test]
    fn test_unknown_extension_is_output_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.unknown");

        let err = ImageFilePresenter::new().present(&figure(), &path).unwrap_err();

        assert!(matches!(err, Error::OutputWrite { path: p, .. } if p == path));
    }

    #[test]
    fn test_missing_directory_is_output_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plot.png");

        let err = ImageFilePresenter::new().present(&figure(), &path).unwrap_err();

        assert!(matches!(err, Error::OutputWrite { .. }));
        assert!(!path.exists());
    }
}
