use crate::core::data::colour::Colour;
use std::error::Error;

/// Turns a palette index into an RGB colour.
///
/// Implementations promise a colour for every index below their depth
/// and a `Failure` for anything past it.
pub trait ColourMap {
    type Failure: Error;

    fn map(&self, palette_index: u32) -> Result<Colour, Self::Failure>;

    fn display_name(&self) -> &str;
}
