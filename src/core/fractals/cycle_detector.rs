use crate::core::data::complex::Complex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Per-trial history of visited z values. Detection requires a bit-exact
/// repeat of both components; orbits that drift through nearby values never
/// trip it. That insensitivity is intentional, not an accuracy bug.
#[derive(Debug, Default)]
pub struct CycleDetector {
    seen: HashMap<(u64, u64), u32>,
}

impl CycleDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.seen.clear();
    }

    /// Records `z` as visited at `index`. If the exact value was already in
    /// the history, returns the index it was first seen at instead.
    pub fn check(&mut self, z: Complex, index: u32) -> Option<u32> {
        let key = (z.real.to_bits(), z.imag.to_bits());
        match self.seen.entry(key) {
            Entry::Occupied(entry) => Some(*entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(index);
                None
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visit_records_and_reports_nothing() {
        let mut detector = CycleDetector::new();

        assert_eq!(detector.check(Complex::new(0.5, -0.5), 0), None);
        assert_eq!(detector.check(Complex::new(0.25, 0.0), 1), None);
        assert_eq!(detector.len(), 2);
    }

    #[test]
    fn test_exact_repeat_returns_first_seen_index() {
        let mut detector = CycleDetector::new();
        detector.check(Complex::new(0.0, 1.0), 0);
        detector.check(Complex::new(-1.0, 0.0), 1);

        assert_eq!(detector.check(Complex::new(0.0, 1.0), 2), Some(0));
    }

    #[test]
    fn test_nearby_value_is_not_a_repeat() {
        // Bit-exact matching only: one ulp of drift defeats detection.
        let mut detector = CycleDetector::new();
        detector.check(Complex::new(0.1, 0.2), 0);

        let nudged = Complex::new(0.1 + f64::EPSILON, 0.2);
        assert_eq!(detector.check(nudged, 1), None);
    }

    #[test]
    fn test_reset_forgets_the_history() {
        let mut detector = CycleDetector::new();
        detector.check(Complex::ZERO, 0);
        detector.reset();

        assert!(detector.is_empty());
        assert_eq!(detector.check(Complex::ZERO, 0), None);
    }
}
