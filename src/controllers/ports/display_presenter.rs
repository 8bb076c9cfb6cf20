use crate::error::Error;
use crate::presenters::raster::figure::Figure;

pub trait DisplayPresenterPort {
    /// Shows `figure` and returns once the viewer is closed.
    fn display(&self, figure: &Figure) -> Result<(), Error>;
}
