use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;

/// Black through red, orange and yellow to white, in four equal bands.
#[derive(Debug, Default)]
pub struct MandelbrotFireGradient;

impl ColourMap for MandelbrotFireGradient {
    fn map(&self, t: f64) -> Colour {
        let t = t.clamp(0.0, 1.0);

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Colour { r, g, b }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotFireGradient {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::FireGradient
    }
}
