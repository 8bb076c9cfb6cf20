use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;

/// Runs the wrapped palette from its top colour down to its bottom colour.
pub struct Reversed {
    inner: Box<dyn MandelbrotColourMap>,
    display_name: String,
}

impl Reversed {
    #[must_use]
    pub fn new(inner: Box<dyn MandelbrotColourMap>) -> Self {
        let display_name = format!("{} (reversed)", inner.display_name());

        Self {
            inner,
            display_name,
        }
    }
}

impl ColourMap for Reversed {
    fn map(&self, t: f64) -> Colour {
        self.inner.map(1.0 - t.clamp(0.0, 1.0))
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl MandelbrotColourMap for Reversed {
    fn kind(&self) -> ColourMapKind {
        self.inner.kind()
    }

    fn is_reversed(&self) -> bool {
        true
    }
}
