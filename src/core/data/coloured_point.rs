use crate::core::data::iteration_point::IterationPoint;

/// One rendered sample: the finished trial plus the palette index a
/// colouring algorithm assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ColouredPoint {
    pub point: IterationPoint,
    pub palette_index: u32,
}
