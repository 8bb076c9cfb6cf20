use clap::Parser;

use crate::controllers::mandelbrot::{MandelbrotController, RenderOutcome};
use crate::controllers::ports::display_presenter::DisplayPresenterPort;
use crate::error::{Error, InvalidParameter};
use crate::input::cli::args::CliArgs;
use crate::presenters::file::image_file::ImageFilePresenter;

pub struct RunCliCommand {
    args: CliArgs,
    display: Option<Box<dyn DisplayPresenterPort>>,
}

impl RunCliCommand {
    /// Uses the preview window when the crate is built with the `gui` feature.
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            display: default_display(),
        }
    }

    /// Parses the process arguments; exits with usage on bad flags.
    pub fn from_env() -> Self {
        Self::new(CliArgs::parse())
    }

    #[must_use]
    pub fn with_display(mut self, display: Option<Box<dyn DisplayPresenterPort>>) -> Self {
        self.display = display;
        self
    }

    /// Renders, saves and shows the figure.
    ///
    /// A failed save is reported after the figure has been shown.
    pub fn execute(self) -> Result<RenderOutcome, Error> {
        let display = if self.args.no_show { None } else { self.display };
        let config = self.args.into_config()?;

        if config.output.is_none() && display.is_none() {
            return Err(InvalidParameter::NoRenderTarget.into());
        }

        let controller = MandelbrotController::new(ImageFilePresenter::new());
        let mut outcome = controller.render(&config)?;

        if let Some(Ok(path)) = &outcome.saved_to {
            println!("Saved to {}", path.display());
        }

        if let Some(display) = &display {
            display.display(&outcome.figure)?;
        }

        match outcome.saved_to.take() {
            Some(Err(err)) => Err(err),
            saved_to => {
                outcome.saved_to = saved_to;
                Ok(outcome)
            }
        }
    }
}

#[cfg(feature = "gui")]
fn default_display() -> Option<Box<dyn DisplayPresenterPort>> {
    Some(Box::new(crate::presenters::pixels::presenter::PixelsPresenter::new()))
}

#[cfg(not(feature = "gui"))]
fn default_display() -> Option<Box<dyn DisplayPresenterPort>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    use crate::presenters::raster::figure::Figure;

    #[derive(Default, Clone)]
    struct RecordingDisplay {
        shown: Rc<RefCell<Vec<(u32, u32)>>>,
    }

    impl DisplayPresenterPort for RecordingDisplay {
        fn display(&self, figure: &Figure) -> Result<(), Error> {
            self.shown.borrow_mut().push(figure.dimensions());
            Ok(())
        }
    }

    fn command(output: &Path, extra: &[&str]) -> RunCliCommand {
        let output = output.to_str().unwrap();
        let base = [
            "mandelbrot_plot", "--width", "24", "--height", "20", "--max-iter", "30", "--dpi", "20", "-o", output,
        ];
        let args = CliArgs::try_parse_from(base.iter().chain(extra.iter())).unwrap();

        RunCliCommand::new(args)
    }

    #[test]
    fn test_no_save_without_display_is_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let result = command(&dir.path().join("plot.png"), &["--no-save"])
            .with_display(None)
            .execute();

        assert!(matches!(
            result,
            Err(Error::InvalidParameter(InvalidParameter::NoRenderTarget))
        ));
    }

    #[test]
    fn test_no_save_shows_figure_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let display = RecordingDisplay::default();

        let outcome = command(&path, &["--no-save"])
            .with_display(Some(Box::new(display.clone())))
            .execute()
            .unwrap();

        assert!(outcome.saved_to.is_none());
        assert!(!path.exists());
        assert_eq!(*display.shown.borrow(), vec![outcome.figure.dimensions()]);
    }

    #[test]
    fn test_saves_and_shows_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let display = RecordingDisplay::default();

        let outcome = command(&path, &[])
            .with_display(Some(Box::new(display.clone())))
            .execute()
            .unwrap();

        assert!(matches!(outcome.saved_to, Some(Ok(ref saved)) if saved == &path));
        assert!(path.exists());
        assert_eq!(display.shown.borrow().len(), 1);
    }

    #[test]
    fn test_no_show_skips_display() {
        let dir = tempfile::tempdir().unwrap();
        let display = RecordingDisplay::default();

        command(&dir.path().join("plot.png"), &["--no-show"])
            .with_display(Some(Box::new(display.clone())))
            .execute()
            .unwrap();

        assert!(display.shown.borrow().is_empty());
    }

    #[test]
    fn test_save_failure_still_shows_then_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plot.png");
        let display = RecordingDisplay::default();

        let result = command(&path, &[])
            .with_display(Some(Box::new(display.clone())))
            .execute();

        assert!(matches!(result, Err(Error::OutputWrite { path: ref reported, .. }) if reported == &path));
        assert_eq!(display.shown.borrow().len(), 1);
    }
}
