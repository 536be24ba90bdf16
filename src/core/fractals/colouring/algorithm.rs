use crate::core::data::iteration_point::IterationPoint;
use crate::core::fractals::listener::IterationListener;

pub const DEFAULT_PALETTE_DEPTH: u32 = 400;

/// Listener that condenses a completed trial into a palette index. The
/// index is consumed by an external gradient layer; this crate only
/// guarantees the `[0, depth)` range.
///
/// `Send` lets parallel renderers hand each worker its own boxed
/// instance.
pub trait ColouringAlgorithm: IterationListener + Send {
    /// Palette index in `[0, depth)` for a terminally classified point.
    fn palette_index(&self, point: &IterationPoint) -> u32;

    /// Size of the palette the indices address.
    fn depth(&self) -> u32;

    fn display_name(&self) -> &str;
}
