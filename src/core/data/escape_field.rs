use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Per-pixel escape iterations in row-major order, each in `[1, iteration_cap]`.
///
/// A value equal to the cap means the orbit did not escape in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeField {
    resolution: Resolution,
    iteration_cap: u32,
    values: Vec<u32>,
}

impl EscapeField {
    /// Wraps already-computed values. `values.len()` must equal the resolution's size.
    pub(crate) fn from_values(resolution: Resolution, iteration_cap: u32, values: Vec<u32>) -> Self {
        debug_assert_eq!(values.len(), resolution.size());
        debug_assert!(values.iter().all(|&v| (1..=iteration_cap).contains(&v)));

        Self {
            resolution,
            iteration_cap,
            values,
        }
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.resolution.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.resolution.height()
    }

    #[must_use]
    pub fn iteration_cap(&self) -> u32 {
        self.iteration_cap
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn into_values(self) -> Vec<u32> {
        self.values
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        let point = Point { x: col, y: row };
        if !self.resolution.contains_point(point) {
            return None;
        }

        Some(self.values[self.resolution.index_of(point)])
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[u32]> {
        let width = self.width();
        self.values.get(row * width..(row + 1) * width)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.values.chunks_exact(self.width())
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.values.iter().copied().min().unwrap_or(self.iteration_cap)
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(self.iteration_cap)
    }

    /// Number of pixels pinned at the cap, i.e. presumed inside the set.
    #[must_use]
    pub fn count_in_set(&self) -> usize {
        self.values.iter().filter(|&&v| v == self.iteration_cap).count()
    }
}
