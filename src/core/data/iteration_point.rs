use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Classification {
    Unresolved,
    Inside,
    BailedOut,
    Cycled,
}

impl Classification {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::Inside => "inside",
            Self::BailedOut => "bailed out",
            Self::Cycled => "cycled",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Record of one escape-time trial. Created per sample point, mutated only
/// by the owning iteration loop, and read-only for listeners and output
/// consumers once a terminal classification is set.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationPoint {
    pixel: Point,
    pixel_value: Complex,
    current: Complex,
    min: Complex,
    max: Complex,
    iterations: u32,
    classification: Classification,
    repeat_index: Option<u32>,
}

impl IterationPoint {
    #[must_use]
    pub fn new(pixel: Point, pixel_value: Complex) -> Self {
        Self {
            pixel,
            pixel_value,
            current: pixel_value,
            min: pixel_value,
            max: pixel_value,
            iterations: 0,
            classification: Classification::Unresolved,
            repeat_index: None,
        }
    }

    /// Resets the record to the formula's starting value. Extremes collapse
    /// onto the start so the first advance compares against something real.
    pub(crate) fn begin(&mut self, z: Complex) {
        self.current = z;
        self.min = z;
        self.max = z;
        self.iterations = 0;
        self.classification = Classification::Unresolved;
        self.repeat_index = None;
    }

    /// Records one iteration step: the new z, the bumped count, and the
    /// running extremes by modulus comparison.
    pub(crate) fn advance(&mut self, z: Complex) {
        self.current = z;
        self.iterations += 1;
        self.min = self.min.min_by_modulus(z);
        self.max = self.max.max_by_modulus(z);
    }

    pub(crate) fn classify(&mut self, classification: Classification) {
        self.classification = classification;
    }

    pub(crate) fn record_cycle(&mut self, repeat_index: u32) {
        self.classification = Classification::Cycled;
        self.repeat_index = Some(repeat_index);
    }

    #[must_use]
    pub fn pixel(&self) -> Point {
        self.pixel
    }

    #[must_use]
    pub fn pixel_value(&self) -> Complex {
        self.pixel_value
    }

    #[must_use]
    pub fn current(&self) -> Complex {
        self.current
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn classification(&self) -> Classification {
        self.classification
    }

    #[must_use]
    pub fn repeat_index(&self) -> Option<u32> {
        self.repeat_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_point_is_unresolved() {
        let point = IterationPoint::new(Point { x: 3, y: 7 }, Complex::new(0.5, -0.5));

        assert_eq!(point.classification(), Classification::Unresolved);
        assert!(!point.classification().is_terminal());
        assert_eq!(point.iterations(), 0);
        assert_eq!(point.repeat_index(), None);
        assert_eq!(point.current(), point.pixel_value());
    }

    #[test]
    fn test_advance_tracks_extremes_by_modulus() {
        let mut point = IterationPoint::new(Point { x: 0, y: 0 }, Complex::ZERO);
        point.begin(Complex::new(1.0, 0.0));

        point.advance(Complex::new(0.0, -3.0));
        point.advance(Complex::new(0.5, 0.0));

        assert_eq!(point.iterations(), 2);
        assert_eq!(point.current(), Complex::new(0.5, 0.0));
        assert_eq!(point.min(), Complex::new(0.5, 0.0));
        assert_eq!(point.max(), Complex::new(0.0, -3.0));
    }

    #[test]
    fn test_begin_resets_a_used_record() {
        let mut point = IterationPoint::new(Point { x: 0, y: 0 }, Complex::ZERO);
        point.advance(Complex::new(9.0, 9.0));
        point.classify(Classification::BailedOut);

        point.begin(Complex::new(1.0, 1.0));

        assert_eq!(point.classification(), Classification::Unresolved);
        assert_eq!(point.iterations(), 0);
        assert_eq!(point.min(), Complex::new(1.0, 1.0));
        assert_eq!(point.max(), Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_record_cycle_stores_first_seen_index() {
        let mut point = IterationPoint::new(Point { x: 0, y: 0 }, Complex::ZERO);
        point.record_cycle(4);

        assert_eq!(point.classification(), Classification::Cycled);
        assert_eq!(point.repeat_index(), Some(4));
        assert!(point.classification().is_terminal());
    }
}
