use crate::core::data::affine_point::AffinePoint;
use crate::core::ifs::system::IteratedFunctionSystem;
use log::debug;
use rand::Rng;
use std::collections::BTreeMap;
use std::{error::Error, fmt};

pub const DEFAULT_FUNCTION_ITERATIONS_TO_DISCARD: u32 = 20;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChaosGameError {
    EmptySystem,
    ZeroMaxIterations,
}

impl fmt::Display for ChaosGameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySystem => {
                write!(f, "Cannot run the chaos game on a system with no functions")
            }
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for ChaosGameError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChaosGameSettings {
    /// Points recorded per pass.
    pub max_iterations: u32,
    /// Independent passes, each from a fresh random start.
    pub repeats: u32,
    /// Leading replacements treated as pre-attractor transient.
    pub function_iterations_to_discard: u32,
}

impl Default for ChaosGameSettings {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            repeats: 1,
            function_iterations_to_discard: DEFAULT_FUNCTION_ITERATIONS_TO_DISCARD,
        }
    }
}

/// Accumulated output of a chaos-game run: an ordered histogram of recorded
/// points (coordinate-equal repeats bump a multiplicity instead of pushing a
/// duplicate) plus running extremes, both per axis and by modulus from the
/// origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: BTreeMap<AffinePoint, u32>,
    recorded: u64,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    min_point: Option<AffinePoint>,
    max_point: Option<AffinePoint>,
}

impl PointSet {
    fn new() -> Self {
        Self {
            points: BTreeMap::new(),
            recorded: 0,
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
            min_point: None,
            max_point: None,
        }
    }

    fn record(&mut self, point: AffinePoint) {
        *self.points.entry(point).or_insert(0) += 1;
        self.recorded += 1;

        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);

        let modulus = point.modulus();
        if self.min_point.is_none_or(|p| modulus < p.modulus()) {
            self.min_point = Some(point);
        }
        if self.max_point.is_none_or(|p| modulus > p.modulus()) {
            self.max_point = Some(point);
        }
    }

    /// Distinct points, in coordinate order.
    pub fn points(&self) -> impl Iterator<Item = (AffinePoint, u32)> + '_ {
        self.points.iter().map(|(&point, &multiplicity)| (point, multiplicity))
    }

    #[must_use]
    pub fn multiplicity(&self, point: AffinePoint) -> u32 {
        self.points.get(&point).copied().unwrap_or(0)
    }

    /// Number of distinct points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total recorded points including repeats.
    #[must_use]
    pub fn recorded(&self) -> u64 {
        self.recorded
    }

    #[must_use]
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        (!self.is_empty()).then_some((self.min_x, self.max_x))
    }

    #[must_use]
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        (!self.is_empty()).then_some((self.min_y, self.max_y))
    }

    /// Recorded point closest to the origin by modulus; earliest recording
    /// wins ties.
    #[must_use]
    pub fn min_point(&self) -> Option<AffinePoint> {
        self.min_point
    }

    /// Recorded point furthest from the origin by modulus; earliest
    /// recording wins ties.
    #[must_use]
    pub fn max_point(&self) -> Option<AffinePoint> {
        self.max_point
    }
}

/// Stochastic attractor sampler: repeatedly replaces a running point with
/// its image under a randomly drawn weighted function.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChaosGame {
    settings: ChaosGameSettings,
}

impl ChaosGame {
    pub fn new(settings: ChaosGameSettings) -> Result<Self, ChaosGameError> {
        if settings.max_iterations == 0 {
            return Err(ChaosGameError::ZeroMaxIterations);
        }

        Ok(Self { settings })
    }

    #[must_use]
    pub fn settings(&self) -> ChaosGameSettings {
        self.settings
    }

    /// Runs every pass against the same output set. Each pass starts from a
    /// fresh uniform point in the system's domain, discards the leading
    /// transient replacements, then records until `max_iterations` points
    /// have been produced for the pass.
    pub fn run(
        &self,
        system: &IteratedFunctionSystem,
        rng: &mut impl Rng,
    ) -> Result<PointSet, ChaosGameError> {
        if system.is_empty() {
            return Err(ChaosGameError::EmptySystem);
        }

        let mut set = PointSet::new();

        for _ in 0..self.settings.repeats {
            let mut point = system.random_point(rng);
            let mut replacements = 0_u32;
            let mut recorded = 0_u32;

            while recorded < self.settings.max_iterations {
                let Some(function) = system.pick_function(rng) else {
                    break;
                };

                point = function.evaluate(point);

                if replacements >= self.settings.function_iterations_to_discard {
                    set.record(point);
                    recorded += 1;
                }
                replacements += 1;
            }
        }

        debug!(
            "chaos game over '{}': {} recorded, {} distinct, x {:?}, y {:?}",
            system.name(),
            set.recorded(),
            set.len(),
            set.x_bounds(),
            set.y_bounds(),
        );

        Ok(set)
    }
}
