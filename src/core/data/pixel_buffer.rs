use crate::core::data::resolution::Resolution;
use image::RgbImage;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("resolution needs {expected} bytes but buffer holds {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB bytes, row-major with row 0 first.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(resolution: Resolution, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = resolution.size() * BYTES_PER_PIXEL;
        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self { resolution, buffer })
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    /// Rows in reverse order, so row 0 ends up at the bottom of an image.
    #[must_use]
    pub fn flipped_vertically(&self) -> Self {
        let row_bytes = self.resolution.width() * BYTES_PER_PIXEL;
        let buffer = self
            .buffer
            .chunks_exact(row_bytes)
            .rev()
            .flatten()
            .copied()
            .collect();

        Self {
            resolution: self.resolution,
            buffer,
        }
    }

    #[must_use]
    pub fn into_rgb_image(self) -> Option<RgbImage> {
        let width = u32::try_from(self.resolution.width()).ok()?;
        let height = u32::try_from(self.resolution.height()).ok()?;

        RgbImage::from_raw(width, height, self.buffer)
    }
}
