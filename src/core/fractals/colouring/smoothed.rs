use crate::core::data::iteration_point::{Classification, IterationPoint};
use crate::core::fractals::colouring::algorithm::{ColouringAlgorithm, DEFAULT_PALETTE_DEPTH};
use crate::core::fractals::colouring::kinds::ColouringKinds;
use crate::core::fractals::listener::IterationListener;
use std::f64::consts::LN_2;

/// Continuous escape-time index. The raw iteration count gives visible
/// bands; correcting it by how far past the bailout radius the orbit
/// landed removes them:
///
///   nu = n + 1 - ln(ln|z| / ln B) / ln 2
///
/// with B the bailout radius. nu is then scaled into the palette range.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedEscapeTime {
    depth: u32,
    max_iterations: u32,
    bailout: f64,
}

impl SmoothedEscapeTime {
    #[must_use]
    pub fn new(max_iterations: u32, bailout: f64) -> Self {
        Self::with_depth(DEFAULT_PALETTE_DEPTH, max_iterations, bailout)
    }

    #[must_use]
    pub fn with_depth(depth: u32, max_iterations: u32, bailout: f64) -> Self {
        Self {
            depth: depth.max(1),
            max_iterations: max_iterations.max(1),
            bailout,
        }
    }
}

impl IterationListener for SmoothedEscapeTime {}

impl ColouringAlgorithm for SmoothedEscapeTime {
    fn palette_index(&self, point: &IterationPoint) -> u32 {
        if point.classification() != Classification::BailedOut {
            // Interior and cycled points share the top of the range.
            return self.depth - 1;
        }

        let count = f64::from(point.iterations());
        let modulus = point.current().modulus();
        let nu = count + 1.0 - (modulus.ln() / self.bailout.ln()).ln() / LN_2;

        // A degenerate modulus or bailout turns nu non-finite; fall back to
        // the unsmoothed count rather than poisoning the cast.
        let smooth = if nu.is_finite() { nu } else { count };

        let scaled = smooth * f64::from(self.depth) / f64::from(self.max_iterations);
        scaled.clamp(0.0, f64::from(self.depth - 1)) as u32
    }

    fn depth(&self) -> u32 {
        self.depth
    }

    fn display_name(&self) -> &str {
        ColouringKinds::SmoothedEscapeTime.display_name()
    }
}
