use std::cmp::Ordering;
use std::fmt;

/// Real 2D coordinate for the affine/chaos-game side. Kept separate from
/// `Complex`: these points are never subject to complex arithmetic.
///
/// The total order is lexicographic on (x, y) via `f64::total_cmp`, which
/// makes the type usable as an ordered map key. Equality is therefore
/// bit-level coordinate equality; coordinate snapping upstream collapses
/// near-zero noise to exactly `0.0` before points are recorded.
#[derive(Debug, Copy, Clone, Default)]
pub struct AffinePoint {
    pub x: f64,
    pub y: f64,
}

impl AffinePoint {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin, used for the min/max-by-modulus summary.
    #[must_use]
    pub fn modulus(&self) -> f64 {
        if self.x == 0.0 && self.y == 0.0 {
            return 0.0;
        }
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AffinePoint {}

impl PartialOrd for AffinePoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AffinePoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then(self.y.total_cmp(&other.y))
    }
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
