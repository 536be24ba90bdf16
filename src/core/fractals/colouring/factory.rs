use crate::core::fractals::colouring::algorithm::ColouringAlgorithm;
use crate::core::fractals::colouring::kinds::ColouringKinds;
use crate::core::fractals::colouring::smoothed::SmoothedEscapeTime;
use crate::core::fractals::colouring::triangle_grid::{DEFAULT_LATTICE_CONSTANT, TriangleGrid};
use crate::core::fractals::escape_time::EscapeTimeSettings;

#[must_use]
pub fn colouring_factory(
    kind: ColouringKinds,
    depth: u32,
    settings: EscapeTimeSettings,
) -> Box<dyn ColouringAlgorithm> {
    match kind {
        ColouringKinds::SmoothedEscapeTime => Box::new(SmoothedEscapeTime::with_depth(
            depth,
            settings.max_iterations,
            settings.bailout,
        )),
        ColouringKinds::TriangleGrid => {
            Box::new(TriangleGrid::with_depth(depth, DEFAULT_LATTICE_CONSTANT))
        }
    }
}
