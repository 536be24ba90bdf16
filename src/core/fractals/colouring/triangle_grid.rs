use crate::core::data::affine_point::AffinePoint;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_point::IterationPoint;
use crate::core::fractals::colouring::algorithm::{ColouringAlgorithm, DEFAULT_PALETTE_DEPTH};
use crate::core::fractals::colouring::kinds::ColouringKinds;
use crate::core::fractals::listener::IterationListener;

pub const DEFAULT_LATTICE_CONSTANT: f64 = 1.0;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Colours by where the orbit's extreme components land on a triangular
/// lattice. The component-wise maxima are mapped into the Eisenstein basis
/// for lattice constant `len`:
///
///   b = 2·im / (len·√3),  a = re + b/2
///
/// each coordinate is rounded up to the next lattice point, and the pair is
/// mapped back to the Cartesian representative `(len·(a − b/2), len·b·√3/2)`
/// carrying the signs of the orbit components. The representative's Manhattan
/// cell distance picks the palette entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleGrid {
    depth: u32,
    lattice_constant: f64,
    max_re: f64,
    max_im: f64,
}

impl TriangleGrid {
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_PALETTE_DEPTH, DEFAULT_LATTICE_CONSTANT)
    }

    /// Lattice constants must be positive; anything else is replaced by the
    /// default.
    #[must_use]
    pub fn with_depth(depth: u32, lattice_constant: f64) -> Self {
        let lattice_constant = if lattice_constant > 0.0 && lattice_constant.is_finite() {
            lattice_constant
        } else {
            DEFAULT_LATTICE_CONSTANT
        };

        Self {
            depth: depth.max(1),
            lattice_constant,
            max_re: 0.0,
            max_im: 0.0,
        }
    }

    /// The lattice point nearest (by ceiling) to the tracked component
    /// maxima, back in Cartesian coordinates and carrying the signs of the
    /// components that produced it.
    #[must_use]
    pub fn representative(&self) -> AffinePoint {
        let len = self.lattice_constant;
        let raw_b = 2.0 * self.max_im.abs() / (len * SQRT_3);
        let a = (self.max_re.abs() + raw_b / 2.0).ceil();
        let b = raw_b.ceil();

        let x = len * (a - b / 2.0);
        let y = len * b * SQRT_3 / 2.0;

        AffinePoint::new(x.copysign(self.max_re), y.copysign(self.max_im))
    }
}

impl Default for TriangleGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl IterationListener for TriangleGrid {
    fn on_start(&mut self, point: &IterationPoint) {
        self.max_re = point.current().real;
        self.max_im = point.current().imag;
    }

    fn on_iteration(&mut self, z: Complex, _point: &IterationPoint) {
        if z.real.abs() > self.max_re.abs() {
            self.max_re = z.real;
        }
        if z.imag.abs() > self.max_im.abs() {
            self.max_im = z.imag;
        }
    }
}

impl ColouringAlgorithm for TriangleGrid {
    fn palette_index(&self, _point: &IterationPoint) -> u32 {
        let representative = self.representative();
        let cells = (representative.x.abs() + representative.y.abs()) / self.lattice_constant;

        // A NaN aggregate casts to zero here, which keeps degenerate orbits
        // on the first palette entry.
        (cells.round() as i64).rem_euclid(i64::from(self.depth)) as u32
    }

    fn depth(&self) -> u32 {
        self.depth
    }

    fn display_name(&self) -> &str {
        ColouringKinds::TriangleGrid.display_name()
    }
}
