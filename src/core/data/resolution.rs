use crate::core::data::point::Point;
use crate::error::InvalidParameter;

/// Number of sample columns (`width`) and rows (`height`), both at least one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: usize,
    height: usize,
}

impl Resolution {
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidParameter> {
        if width == 0 || height == 0 {
            return Err(InvalidParameter::InvalidResolution { width, height });
        }

        Ok(Self { width, height })
    }

    /// Skips validation; only for non-zero constants.
    pub(crate) const fn new_unchecked(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Row-major offset of `point`; the caller checks bounds.
    #[must_use]
    pub fn index_of(&self, point: Point) -> usize {
        point.y * self.width + point.x
    }

    /// All grid positions in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point { x, y }))
    }
}
