use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;

const RED_FLOOR: f64 = 0.0416;
const RED_KNEE: f64 = 0.365079;
const GREEN_KNEE: f64 = 0.746032;

/// Black-red-yellow-white ramp; red saturates first, then green, then blue.
#[derive(Debug, Default)]
pub struct Hot;

impl ColourMap for Hot {
    fn map(&self, t: f64) -> Colour {
        let t = t.clamp(0.0, 1.0);

        let r = if t < RED_KNEE {
            RED_FLOOR + (1.0 - RED_FLOOR) * t / RED_KNEE
        } else {
            1.0
        };
        let g = ((t - RED_KNEE) / (GREEN_KNEE - RED_KNEE)).clamp(0.0, 1.0);
        let b = ((t - GREEN_KNEE) / (1.0 - GREEN_KNEE)).clamp(0.0, 1.0);

        Colour::from_unit(r, g, b)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for Hot {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Hot
    }
}
