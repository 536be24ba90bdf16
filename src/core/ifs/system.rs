use crate::core::data::affine_point::AffinePoint;
use crate::core::ifs::linear_function::{LinearFunction, LinearFunctionError, Rounding};
use rand::Rng;

pub const DEFAULT_DOMAIN_LOW: f64 = -1.0;
pub const DEFAULT_DOMAIN_RANGE: f64 = 2.0;

/// Named, weighted collection of affine maps. Functions are appended during
/// setup and the collection is read-only for the duration of a chaos-game
/// run. `total_weight` is maintained incrementally on every append so that
/// weighted draws stay O(1) in bookkeeping and O(n) in the scan.
#[derive(Debug, Clone, PartialEq)]
pub struct IteratedFunctionSystem {
    name: String,
    functions: Vec<LinearFunction>,
    total_weight: f64,
    domain_low: f64,
    domain_range: f64,
}

impl IteratedFunctionSystem {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            functions: Vec::new(),
            total_weight: 0.0,
            domain_low: DEFAULT_DOMAIN_LOW,
            domain_range: DEFAULT_DOMAIN_RANGE,
        }
    }

    pub fn add_function(&mut self, function: LinearFunction) {
        self.total_weight += function.weight();
        self.functions.push(function);
    }

    /// Draws a function with probability proportional to its weight: `r` is
    /// uniform in `[0, total_weight)` and the first function whose
    /// cumulative weight reaches or exceeds `r` wins, so earlier functions
    /// take boundary ties. `None` only when the system holds no functions.
    pub fn pick_function(&self, rng: &mut impl Rng) -> Option<&LinearFunction> {
        if self.functions.is_empty() {
            return None;
        }

        // A zero total weight degenerates to the first function.
        let r = if self.total_weight > 0.0 {
            rng.gen_range(0.0..self.total_weight)
        } else {
            0.0
        };

        self.function_for_draw(r)
    }

    fn function_for_draw(&self, r: f64) -> Option<&LinearFunction> {
        let mut cumulative = 0.0;

        for function in &self.functions {
            cumulative += function.weight();
            if cumulative >= r {
                return Some(function);
            }
        }

        self.functions.last()
    }

    /// A uniform point in the domain square.
    pub fn random_point(&self, rng: &mut impl Rng) -> AffinePoint {
        let x = rng.gen_range(self.domain_low..self.domain_low + self.domain_range);
        let y = rng.gen_range(self.domain_low..self.domain_low + self.domain_range);

        AffinePoint::new(x, y)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn functions(&self) -> &[LinearFunction] {
        &self.functions
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// The classic three-map Sierpinski triangle over `[0, 1]²`, equal
    /// weights.
    pub fn sierpinski() -> Result<Self, LinearFunctionError> {
        let rounding = Rounding::default();
        let mut system = Self::new("sierpinski");

        system.add_function(LinearFunction::new(
            "bottom left",
            [[0.5, 0.0, 0.0], [0.0, 0.5, 0.0]],
            1.0,
            rounding,
        )?);
        system.add_function(LinearFunction::new(
            "bottom right",
            [[0.5, 0.0, 0.5], [0.0, 0.5, 0.0]],
            1.0,
            rounding,
        )?);
        system.add_function(LinearFunction::new(
            "top",
            [[0.5, 0.0, 0.0], [0.0, 0.5, 0.5]],
            1.0,
            rounding,
        )?);

        Ok(system)
    }

    /// Barnsley's fern with the standard coefficient table.
    pub fn barnsley_fern() -> Result<Self, LinearFunctionError> {
        let rounding = Rounding::default();
        let mut system = Self::new("barnsley fern");

        system.add_function(LinearFunction::new(
            "stem",
            [[0.0, 0.0, 0.0], [0.0, 0.16, 0.0]],
            0.01,
            rounding,
        )?);
        system.add_function(LinearFunction::new(
            "successive leaflets",
            [[0.85, 0.04, 0.0], [-0.04, 0.85, 1.6]],
            0.85,
            rounding,
        )?);
        system.add_function(LinearFunction::new(
            "largest left leaflet",
            [[0.2, -0.26, 0.0], [0.23, 0.22, 1.6]],
            0.07,
            rounding,
        )?);
        system.add_function(LinearFunction::new(
            "largest right leaflet",
            [[-0.15, 0.28, 0.0], [0.26, 0.24, 0.44]],
            0.07,
            rounding,
        )?);

        Ok(system)
    }
}
