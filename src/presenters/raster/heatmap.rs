use image::RgbImage;

use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::normalize::Normalize;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::resolution::Resolution;
use crate::error::InvalidParameter;

/// Resamples `field` to `size` with bilinear interpolation.
///
/// Output keeps the field's row order: row 0 samples the lowest imaginary part.
/// Sample centres line up with pixel centres and edges clamp to the border cells.
#[must_use]
pub fn resample_bilinear(field: &EscapeField, size: Resolution) -> Vec<f64> {
    let source = field.values();
    let source_width = field.width();
    let at = |row: usize, col: usize| source[row * source_width + col] as f64;

    let columns: Vec<(usize, usize, f64)> = (0..size.width())
        .map(|i| source_span(i, size.width(), field.width()))
        .collect();

    let mut values = Vec::with_capacity(size.size());
    for j in 0..size.height() {
        let (r0, r1, fy) = source_span(j, size.height(), field.height());

        for &(c0, c1, fx) in &columns {
            let low = lerp(at(r0, c0), at(r0, c1), fx);
            let high = lerp(at(r1, c0), at(r1, c1), fx);
            values.push(lerp(low, high, fy));
        }
    }

    values
}

/// Colour image of `field` at `size`, highest imaginary part in the top row.
pub fn render_heatmap<CMap: ColourMap + ?Sized>(
    field: &EscapeField,
    mapper: &CMap,
    norm: Normalize,
    size: Resolution,
) -> Result<RgbImage, InvalidParameter> {
    let too_large = || InvalidParameter::InvalidResolution {
        width: size.width(),
        height: size.height(),
    };

    let values = resample_bilinear(field, size);
    let buffer = generate_pixel_buffer(size, &values, mapper, norm).map_err(|_| too_large())?;

    buffer.flipped_vertically().into_rgb_image().ok_or_else(too_large)
}

fn source_span(index: usize, target: usize, source: usize) -> (usize, usize, f64) {
    let last = (source - 1) as f64;
    let position = ((index as f64 + 0.5) / target as f64 * source as f64 - 0.5).clamp(0.0, last);
    let lower = position.floor() as usize;
    let upper = (lower + 1).min(source - 1);

    (lower, upper, position - lower as f64)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
