use crate::core::data::complex::Complex;

/// Point formula driving an escape-time trial. Mandelbrot iterates from a
/// configurable start (conventionally the origin) and folds the pixel value
/// in each step; Julia starts from the pixel value itself and folds in a
/// fixed seed constant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalFormula {
    Mandelbrot { start: Complex },
    Julia { seed: Complex },
}

impl FractalFormula {
    pub const ALL_NAMES: &'static [&'static str] = &["Mandelbrot", "Julia"];

    /// Mandelbrot with the conventional zero start.
    #[must_use]
    pub const fn mandelbrot() -> Self {
        Self::Mandelbrot {
            start: Complex::ZERO,
        }
    }

    #[must_use]
    pub const fn julia(seed: Complex) -> Self {
        Self::Julia { seed }
    }

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Mandelbrot { .. } => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }

    /// Starting z for one pixel's trial.
    #[must_use]
    pub fn initial_z(&self, pixel_value: Complex) -> Complex {
        match self {
            Self::Mandelbrot { start } => *start,
            Self::Julia { .. } => pixel_value,
        }
    }

    /// One update step: `z^power` plus the formula's additive term.
    #[must_use]
    pub fn step(&self, z: Complex, pixel_value: Complex, power: u32) -> Complex {
        match self {
            Self::Mandelbrot { .. } => z.powu(power) + pixel_value,
            Self::Julia { seed } => z.powu(power) + *seed,
        }
    }
}

impl std::fmt::Display for FractalFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
