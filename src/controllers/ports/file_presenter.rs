use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::presenters::raster::figure::Figure;

pub trait FilePresenterPort {
    /// Writes `figure` to `filepath` and returns the path actually written.
    fn present(&self, figure: &Figure, filepath: &Path) -> Result<PathBuf, Error>;
}
