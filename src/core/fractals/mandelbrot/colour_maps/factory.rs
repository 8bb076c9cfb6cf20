use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::{
    blue_white_gradient::MandelbrotBlueWhiteGradient,
    fire_gradient::MandelbrotFireGradient,
    gray::Gray,
    hot::Hot,
    kinds::{ColourMapKind, ColourMapSelection},
    reversed::Reversed,
    sampled_gradient::SampledGradient,
};
use crate::error::InvalidParameter;

#[must_use]
pub fn mandelbrot_colour_map_factory(selection: ColourMapSelection) -> Box<dyn MandelbrotColourMap> {
    let map: Box<dyn MandelbrotColourMap> = match selection.kind {
        ColourMapKind::Magma => Box::new(SampledGradient::magma()),
        ColourMapKind::Inferno => Box::new(SampledGradient::inferno()),
        ColourMapKind::Viridis => Box::new(SampledGradient::viridis()),
        ColourMapKind::Hot => Box::new(Hot),
        ColourMapKind::Gray => Box::new(Gray),
        ColourMapKind::FireGradient => Box::new(MandelbrotFireGradient),
        ColourMapKind::BlueWhiteGradient => Box::new(MandelbrotBlueWhiteGradient),
    };

    if selection.reversed {
        Box::new(Reversed::new(map))
    } else {
        map
    }
}

/// Resolves a palette name such as `magma` or `hot_r`.
pub fn colour_map_by_name(name: &str) -> Result<Box<dyn MandelbrotColourMap>, InvalidParameter> {
    let selection: ColourMapSelection = name.parse()?;

    Ok(mandelbrot_colour_map_factory(selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourMapKind::ALL {
            let map = mandelbrot_colour_map_factory(ColourMapSelection::new(kind));
            assert_eq!(map.kind(), kind);
            assert!(!map.is_reversed());
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in ColourMapKind::ALL {
            let map = mandelbrot_colour_map_factory(ColourMapSelection::new(kind));
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn reversed_selection_flips_the_palette() {
        let forward = mandelbrot_colour_map_factory(ColourMapSelection::new(ColourMapKind::Hot));
        let backward = mandelbrot_colour_map_factory(ColourMapSelection::reversed(ColourMapKind::Hot));

        assert!(backward.is_reversed());
        assert_eq!(backward.map(0.0), forward.map(1.0));
        assert_eq!(backward.map(1.0), forward.map(0.0));
    }

    #[test]
    fn by_name_resolves_known_and_rejects_unknown() {
        assert_eq!(colour_map_by_name("viridis").map(|m| m.kind()), Ok(ColourMapKind::Viridis));
        assert!(matches!(
            colour_map_by_name("not-a-palette"),
            Err(InvalidParameter::UnknownColourMap { .. })
        ));
    }
}
