use crate::core::data::colour::Colour;

/// Maps a normalised scalar to a colour.
///
/// `t` is expected in `[0, 1]`; implementations clamp anything outside it.
pub trait ColourMap {
    fn map(&self, t: f64) -> Colour;

    fn display_name(&self) -> &str;
}
