use crate::core::actions::generate_pixel_buffer::normalize::Normalize;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::resolution::Resolution;

/// Colours row-major `values` through `norm` and `mapper`, keeping row order.
pub fn generate_pixel_buffer<CMap: ColourMap + ?Sized>(
    resolution: Resolution,
    values: &[f64],
    mapper: &CMap,
    norm: Normalize,
) -> Result<PixelBuffer, PixelBufferError> {
    let buffer: PixelBufferData = values
        .iter()
        .flat_map(|&value| mapper.map(norm.apply(value)).to_array())
        .collect();

    PixelBuffer::from_data(resolution, buffer)
}
