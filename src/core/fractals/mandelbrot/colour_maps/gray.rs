use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;

#[derive(Debug, Default)]
pub struct Gray;

impl ColourMap for Gray {
    fn map(&self, t: f64) -> Colour {
        Colour::from_unit(t, t, t)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for Gray {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Gray
    }
}
