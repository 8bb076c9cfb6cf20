use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, warn};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::escape_field::EscapeField;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapSelection;
use crate::core::fractals::mandelbrot::escape_time_field::{compute, compute_parallel};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::error::Error;
use crate::presenters::raster::figure::{Figure, check_dpi, rasterize};

/// Everything one render produced.
///
/// A failed save is kept in `saved_to`; the field and figure are still valid.
#[derive(Debug)]
pub struct RenderOutcome {
    pub field: EscapeField,
    pub figure: Figure,
    /// `None` when saving was off.
    pub saved_to: Option<Result<PathBuf, Error>>,
}

/// Runs compute, rasterize and save for a [`MandelbrotConfig`].
pub struct MandelbrotController<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> MandelbrotController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn generate(&self, config: &MandelbrotConfig) -> Result<EscapeField, Error> {
        let params = config.params()?;

        info!(
            width = config.resolution.width(),
            height = config.resolution.height(),
            max_iterations = config.max_iterations,
            parallel = config.parallel,
            "rendering Mandelbrot set"
        );

        let start = Instant::now();
        let field = if config.parallel {
            compute_parallel(&params)
        } else {
            compute(&params)
        };

        info!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            in_set = field.count_in_set(),
            "computed escape-time field"
        );

        Ok(field)
    }

    /// Fails on a bad colour map or dpi before spending time on the field.
    /// Only invalid parameters fail the call; save errors land in the outcome.
    pub fn render(&self, config: &MandelbrotConfig) -> Result<RenderOutcome, Error> {
        config.colour_map.parse::<ColourMapSelection>()?;
        check_dpi(config.dpi)?;

        let field = self.generate(config)?;
        let figure = rasterize(&field, &config.raster_options())?;

        let saved_to = config.output.as_ref().map(|path| {
            let saved = self.presenter.present(&figure, path);
            if let Err(err) = &saved {
                warn!(%err, "figure was rendered but not saved");
            }
            saved
        });

        Ok(RenderOutcome {
            field,
            figure,
            saved_to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::Path;

    use crate::core::data::resolution::Resolution;
    use crate::error::InvalidParameter;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<PathBuf>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, _figure: &Figure, filepath: &Path) -> Result<PathBuf, Error> {
            self.presented.borrow_mut().push(filepath.to_path_buf());
            Ok(filepath.to_path_buf())
        }
    }

    struct FailingPresenter;

    impl FilePresenterPort for FailingPresenter {
        fn present(&self, _figure: &Figure, filepath: &Path) -> Result<PathBuf, Error> {
            Err(Error::OutputWrite {
                path: filepath.to_path_buf(),
                source: image::ImageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such directory",
                )),
            })
        }
    }

    fn small_config() -> MandelbrotConfig {
        MandelbrotConfig {
            resolution: Resolution::new(30, 25).unwrap(),
            max_iterations: 40,
            dpi: 20,
            output: Some(PathBuf::from("out.png")),
            ..MandelbrotConfig::default()
        }
    }

    #[test]
    fn test_render_presents_to_configured_path() {
        let controller = MandelbrotController::new(RecordingPresenter::default());

        let outcome = controller.render(&small_config()).unwrap();

        assert!(matches!(outcome.saved_to, Some(Ok(ref path)) if path == Path::new("out.png")));
        assert_eq!(*controller.presenter.presented.borrow(), vec![PathBuf::from("out.png")]);
        assert_eq!(outcome.field.width(), 30);
        assert_eq!(outcome.field.height(), 25);
    }

    #[test]
    fn test_render_without_output_skips_presenter() {
        let controller = MandelbrotController::new(RecordingPresenter::default());
        let config = MandelbrotConfig {
            output: None,
            ..small_config()
        };

        let outcome = controller.render(&config).unwrap();

        assert!(outcome.saved_to.is_none());
        assert!(controller.presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_save_failure_keeps_field_and_figure() {
        let controller = MandelbrotController::new(FailingPresenter);
        let expected = MandelbrotController::new(RecordingPresenter::default())
            .render(&small_config())
            .unwrap();

        let outcome = controller.render(&small_config()).unwrap();

        assert!(matches!(
            outcome.saved_to,
            Some(Err(Error::OutputWrite { ref path, .. })) if path == Path::new("out.png")
        ));
        assert_eq!(outcome.field, expected.field);
        assert_eq!(outcome.figure, expected.figure);
    }

    #[test]
    fn test_oversized_dpi_fails_before_presenting() {
        let controller = MandelbrotController::new(RecordingPresenter::default());
        let config = MandelbrotConfig {
            dpi: 10_000,
            ..small_config()
        };

        assert!(matches!(
            controller.render(&config),
            Err(Error::InvalidParameter(InvalidParameter::DpiTooLarge { dpi: 10_000, .. }))
        ));
        assert!(controller.presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_parallel_flag_gives_same_field() {
        let controller = MandelbrotController::new(RecordingPresenter::default());
        let config = small_config();

        let serial = controller.generate(&config).unwrap();
        let parallel = controller
            .generate(&MandelbrotConfig {
                parallel: true,
                ..config
            })
            .unwrap();

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_unknown_colour_map_fails_before_presenting() {
        let controller = MandelbrotController::new(RecordingPresenter::default());
        let config = MandelbrotConfig {
            colour_map: "plasma-ish".to_string(),
            ..small_config()
        };

        let err = controller.render(&config).unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidParameter(InvalidParameter::UnknownColourMap { .. })
        ));
        assert!(controller.presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_zero_iterations_is_invalid_parameter() {
        let controller = MandelbrotController::new(RecordingPresenter::default());
        let config = MandelbrotConfig {
            max_iterations: 0,
            ..small_config()
        };

        assert!(matches!(
            controller.render(&config),
            Err(Error::InvalidParameter(InvalidParameter::ZeroIterationCap))
        ));
    }
}
