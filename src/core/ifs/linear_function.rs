use crate::core::data::affine_point::AffinePoint;
use crate::core::ifs::variation::Variation;
use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum LinearFunctionError {
    CoefficientShape { rows: usize, columns: usize },
    NegativeWeight { weight: f64 },
}

impl fmt::Display for LinearFunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoefficientShape { rows, columns } => {
                write!(f, "Coefficients must form 2 rows of 3, got {}x{}", rows, columns)
            }
            Self::NegativeWeight { weight } => {
                write!(f, "Weight must not be negative, got {}", weight)
            }
        }
    }
}

impl Error for LinearFunctionError {}

/// Precision applied to every evaluated coordinate: round to a fixed number
/// of decimal places, then snap values below the lower limit to exactly
/// zero. Keeps long chaos-game runs from accumulating floating noise near
/// the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rounding {
    pub decimal_places: u32,
    pub lower_limit: f64,
}

impl Default for Rounding {
    fn default() -> Self {
        Self {
            decimal_places: 10,
            lower_limit: 1e-6,
        }
    }
}

impl Rounding {
    fn apply(self, value: f64) -> f64 {
        let scale = 10_f64.powi(self.decimal_places as i32);
        let rounded = (value * scale).round() / scale;

        if rounded.abs() < self.lower_limit {
            0.0
        } else {
            rounded
        }
    }
}

/// One weighted affine map `(a·x + b·y + c, d·x + e·y + f)` plus an ordered
/// list of variations applied after it.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFunction {
    name: String,
    coefficients: [[f64; 3]; 2],
    weight: f64,
    variations: Vec<Variation>,
    rounding: Rounding,
}

impl LinearFunction {
    pub fn new(
        name: &str,
        coefficients: [[f64; 3]; 2],
        weight: f64,
        rounding: Rounding,
    ) -> Result<Self, LinearFunctionError> {
        if !(weight >= 0.0) {
            return Err(LinearFunctionError::NegativeWeight { weight });
        }

        Ok(Self {
            name: name.to_owned(),
            coefficients,
            weight,
            variations: Vec::new(),
            rounding,
        })
    }

    /// Builds from dynamically shaped rows, as read from a document.
    pub fn from_rows(
        name: &str,
        rows: &[&[f64]],
        weight: f64,
        rounding: Rounding,
    ) -> Result<Self, LinearFunctionError> {
        if rows.len() != 2 {
            return Err(LinearFunctionError::CoefficientShape {
                rows: rows.len(),
                columns: rows.first().map_or(0, |row| row.len()),
            });
        }
        for row in rows {
            if row.len() != 3 {
                return Err(LinearFunctionError::CoefficientShape {
                    rows: rows.len(),
                    columns: row.len(),
                });
            }
        }

        let coefficients = [
            [rows[0][0], rows[0][1], rows[0][2]],
            [rows[1][0], rows[1][1], rows[1][2]],
        ];

        Self::new(name, coefficients, weight, rounding)
    }

    pub fn add_variation(&mut self, variation: Variation) {
        self.variations.push(variation);
    }

    /// Applies the affine map, then each variation in registration order,
    /// then the rounding rules, per coordinate.
    #[must_use]
    pub fn evaluate(&self, point: AffinePoint) -> AffinePoint {
        let [[a, b, c], [d, e, f]] = self.coefficients;

        let mut x = a * point.x + b * point.y + c;
        let mut y = d * point.x + e * point.y + f;

        for variation in &self.variations {
            (x, y) = variation.apply(x, y);
        }

        AffinePoint::new(self.rounding.apply(x), self.rounding.apply(y))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn coefficients(&self) -> [[f64; 3]; 2] {
        self.coefficients
    }

    #[must_use]
    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    #[must_use]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> LinearFunction {
        LinearFunction::new(
            "identity",
            [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            1.0,
            Rounding::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_evaluate_applies_the_affine_map() {
        let function = LinearFunction::new(
            "shear",
            [[0.5, 0.25, 1.0], [0.0, -1.0, 2.0]],
            1.0,
            Rounding::default(),
        )
        .unwrap();

        let image = function.evaluate(AffinePoint::new(2.0, 4.0));

        assert_eq!(image, AffinePoint::new(3.0, -2.0));
    }

    #[test]
    fn test_variations_apply_in_registration_order() {
        // Spherical then sinusoidal differs from sinusoidal then spherical,
        // so the order is observable.
        let mut function = identity();
        function.add_variation(Variation::Spherical);
        function.add_variation(Variation::Sinusoidal);

        let image = function.evaluate(AffinePoint::new(2.0, 0.0));

        // Affine leaves (2, 0); spherical gives (0.5, 0); sinusoidal gives
        // (sin 0.5, 0).
        assert!((image.x - 0.5_f64.sin()).abs() < 1e-10);
        assert_eq!(image.y, 0.0);
    }

    #[test]
    fn test_coordinates_below_the_lower_limit_snap_to_zero() {
        let function = LinearFunction::new(
            "tiny",
            [[0.0, 0.0, 9e-7], [0.0, 0.0, 0.5]],
            1.0,
            Rounding::default(),
        )
        .unwrap();

        let image = function.evaluate(AffinePoint::ORIGIN);

        assert_eq!(image.x, 0.0);
        assert_eq!(image.y, 0.5);
    }

    #[test]
    fn test_rounding_honours_decimal_places() {
        let function = LinearFunction::new(
            "coarse",
            [[0.0, 0.0, 0.123_456_789], [0.0, 0.0, 0.987_654_321]],
            1.0,
            Rounding {
                decimal_places: 3,
                lower_limit: 1e-6,
            },
        )
        .unwrap();

        let image = function.evaluate(AffinePoint::ORIGIN);

        assert_eq!(image, AffinePoint::new(0.123, 0.988));
    }

    #[test]
    fn test_from_rows_accepts_a_two_by_three_shape() {
        let function = LinearFunction::from_rows(
            "rows",
            &[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]],
            0.5,
            Rounding::default(),
        )
        .unwrap();

        assert_eq!(function.coefficients(), [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(function.weight(), 0.5);
    }

    #[test]
    fn test_from_rows_rejects_wrong_shapes() {
        let three_rows: &[&[f64]] = &[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]];
        assert_eq!(
            LinearFunction::from_rows("bad", three_rows, 1.0, Rounding::default()),
            Err(LinearFunctionError::CoefficientShape { rows: 3, columns: 3 })
        );

        let short_row: &[&[f64]] = &[&[1.0, 0.0], &[0.0, 1.0, 0.0]];
        assert_eq!(
            LinearFunction::from_rows("bad", short_row, 1.0, Rounding::default()),
            Err(LinearFunctionError::CoefficientShape { rows: 2, columns: 2 })
        );
    }

    #[test]
    fn test_negative_and_nan_weights_are_rejected() {
        let coefficients = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

        assert!(matches!(
            LinearFunction::new("bad", coefficients, -0.1, Rounding::default()),
            Err(LinearFunctionError::NegativeWeight { .. })
        ));
        assert!(matches!(
            LinearFunction::new("bad", coefficients, f64::NAN, Rounding::default()),
            Err(LinearFunctionError::NegativeWeight { .. })
        ));
    }
}
