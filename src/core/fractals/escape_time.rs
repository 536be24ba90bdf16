use crate::core::data::iteration_point::{Classification, IterationPoint};
use crate::core::fractals::cycle_detector::CycleDetector;
use crate::core::fractals::formula::FractalFormula;
use crate::core::fractals::listener::IterationListener;
use std::error::Error;
use std::fmt;

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_BAILOUT: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeTimeError {
    ZeroMaxIterations,
    BailoutNotPositive { bailout: f64 },
    UnsupportedPower { power: u32 },
}

impl fmt::Display for EscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::BailoutNotPositive { bailout } => {
                write!(f, "bailout threshold must be positive, got {}", bailout)
            }
            Self::UnsupportedPower { power } => {
                write!(f, "iteration power must be at least 2, got {}", power)
            }
        }
    }
}

impl Error for EscapeTimeError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeSettings {
    pub max_iterations: u32,
    pub bailout: f64,
    pub power: u32,
    pub check_cycles: bool,
}

impl Default for EscapeTimeSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bailout: DEFAULT_BAILOUT,
            power: 2,
            // Off by default: with checking on, the canonical zero orbit
            // classifies Cycled rather than Inside.
            check_cycles: false,
        }
    }
}

/// Escape-time driver: runs one formula over one point until the trial
/// reaches a terminal classification.
///
/// Terminal states: `BailedOut` when the modulus reaches the bailout
/// threshold, `Cycled` when an exact previously-visited value recurs, and
/// `Inside` when the iteration cap passes without either. NaN and infinity
/// propagate through the update rule untouched; a NaN modulus compares
/// false against the bailout, so such orbits run to the cap and fall
/// through to `Inside`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTime {
    formula: FractalFormula,
    settings: EscapeTimeSettings,
}

impl EscapeTime {
    pub fn new(
        formula: FractalFormula,
        settings: EscapeTimeSettings,
    ) -> Result<Self, EscapeTimeError> {
        if settings.max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }
        if !(settings.bailout > 0.0) {
            return Err(EscapeTimeError::BailoutNotPositive {
                bailout: settings.bailout,
            });
        }
        if settings.power < 2 {
            return Err(EscapeTimeError::UnsupportedPower {
                power: settings.power,
            });
        }

        Ok(Self { formula, settings })
    }

    #[must_use]
    pub fn formula(&self) -> FractalFormula {
        self.formula
    }

    #[must_use]
    pub fn settings(&self) -> EscapeTimeSettings {
        self.settings
    }

    /// Runs one trial. The point is reset to the formula's starting value,
    /// advanced until a terminal state, and left holding the final counts
    /// and extremes. Listeners are notified in registration order: start,
    /// one event per step, completion.
    pub fn iterate(
        &self,
        point: &mut IterationPoint,
        listeners: &mut [&mut dyn IterationListener],
    ) {
        let pixel_value = point.pixel_value();
        let mut z = self.formula.initial_z(pixel_value);
        point.begin(z);

        // Fresh per-trial history; the starting value counts as visited.
        let mut detector = CycleDetector::new();
        if self.settings.check_cycles {
            detector.check(z, 0);
        }

        for listener in listeners.iter_mut() {
            listener.on_start(point);
        }

        while point.iterations() <= self.settings.max_iterations {
            z = self.formula.step(z, pixel_value, self.settings.power);

            for listener in listeners.iter_mut() {
                listener.on_iteration(z, point);
            }

            point.advance(z);

            if self.settings.check_cycles {
                if let Some(first_seen) = detector.check(z, point.iterations()) {
                    point.record_cycle(first_seen);
                    break;
                }
            }

            if z.modulus() >= self.settings.bailout {
                point.classify(Classification::BailedOut);
                break;
            }
        }

        if !point.classification().is_terminal() {
            point.classify(Classification::Inside);
        }

        for listener in listeners.iter_mut() {
            listener.on_completed(point);
        }
    }
}
