use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;

pub trait MandelbrotColourMap: ColourMap + Send + Sync {
    fn kind(&self) -> ColourMapKind;

    fn is_reversed(&self) -> bool {
        false
    }
}

impl ColourMap for Box<dyn MandelbrotColourMap> {
    fn map(&self, t: f64) -> Colour {
        (**self).map(t)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
