use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;

// Perceptually uniform palettes, sampled at nine evenly spaced stops.
const MAGMA: [Colour; 9] = [
    Colour::new(0, 0, 4),
    Colour::new(28, 16, 68),
    Colour::new(79, 18, 123),
    Colour::new(129, 37, 129),
    Colour::new(181, 54, 122),
    Colour::new(229, 80, 100),
    Colour::new(251, 135, 97),
    Colour::new(254, 194, 135),
    Colour::new(252, 253, 191),
];

const INFERNO: [Colour; 9] = [
    Colour::new(0, 0, 4),
    Colour::new(31, 12, 72),
    Colour::new(85, 15, 109),
    Colour::new(136, 34, 106),
    Colour::new(186, 54, 85),
    Colour::new(227, 89, 51),
    Colour::new(249, 140, 10),
    Colour::new(249, 201, 50),
    Colour::new(252, 255, 164),
];

const VIRIDIS: [Colour; 9] = [
    Colour::new(68, 1, 84),
    Colour::new(71, 44, 122),
    Colour::new(59, 82, 139),
    Colour::new(44, 114, 142),
    Colour::new(33, 145, 140),
    Colour::new(39, 173, 129),
    Colour::new(92, 200, 99),
    Colour::new(170, 220, 50),
    Colour::new(253, 231, 37),
];

/// Piecewise-linear interpolation between evenly spaced colour stops.
#[derive(Debug)]
pub struct SampledGradient {
    kind: ColourMapKind,
    stops: &'static [Colour],
}

impl SampledGradient {
    #[must_use]
    pub fn magma() -> Self {
        Self {
            kind: ColourMapKind::Magma,
            stops: &MAGMA,
        }
    }

    #[must_use]
    pub fn inferno() -> Self {
        Self {
            kind: ColourMapKind::Inferno,
            stops: &INFERNO,
        }
    }

    #[must_use]
    pub fn viridis() -> Self {
        Self {
            kind: ColourMapKind::Viridis,
            stops: &VIRIDIS,
        }
    }
}

impl ColourMap for SampledGradient {
    fn map(&self, t: f64) -> Colour {
        let last = self.stops.len() - 1;
        let position = t.clamp(0.0, 1.0) * last as f64;
        let index = (position.floor() as usize).min(last);

        if index == last {
            return self.stops[last];
        }

        self.stops[index].lerp(self.stops[index + 1], position - index as f64)
    }

    fn display_name(&self) -> &str {
        self.kind.display_name()
    }
}

impl MandelbrotColourMap for SampledGradient {
    fn kind(&self) -> ColourMapKind {
        self.kind
    }
}
