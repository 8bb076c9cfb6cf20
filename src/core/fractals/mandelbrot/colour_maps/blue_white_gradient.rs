use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;

/// Bernstein-polynomial blend: dark at both ends, pale blue-white in the middle.
#[derive(Debug, Default)]
pub struct MandelbrotBlueWhiteGradient;

impl ColourMap for MandelbrotBlueWhiteGradient {
    fn map(&self, t: f64) -> Colour {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;

        let r = (9.0 * u * t * t * t * 255.0) as u8;
        let g = (15.0 * u * u * t * t * 255.0) as u8;
        let b = (8.5 * u * u * u * t * 255.0) as u8;

        Colour { r, g, b }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotBlueWhiteGradient {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::BlueWhiteGradient
    }
}
