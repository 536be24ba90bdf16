use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    EmptySize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySize { width, height } => {
                write!(f, "complex rect extent must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Rectangular window on the complex plane, addressed like `PixelRect` by
/// its top-left corner (minimum real, minimum imaginary) and extent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    width: f64,
    height: f64,
}

impl ComplexRect {
    pub fn new(top_left: Complex, width: f64, height: f64) -> Result<Self, ComplexRectError> {
        // NaN extents fail here too: the comparison below is false for NaN.
        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::EmptySize { width, height });
        }

        Ok(Self {
            top_left,
            width,
            height,
        })
    }

    /// The classic full-set Mandelbrot window.
    #[must_use]
    pub fn mandelbrot_view() -> Self {
        Self {
            top_left: Complex::new(-2.5, -1.0),
            width: 3.5,
            height: 2.0,
        }
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        Complex::new(self.top_left.real + self.width, self.top_left.imag + self.height)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_positive_extent() {
        let rect = ComplexRect::new(Complex::new(-2.0, -1.0), 3.0, 2.0).unwrap();

        assert_eq!(rect.top_left(), Complex::new(-2.0, -1.0));
        assert_eq!(rect.bottom_right(), Complex::new(1.0, 1.0));
        assert_eq!(rect.width(), 3.0);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_new_rejects_non_positive_extent() {
        assert_eq!(
            ComplexRect::new(Complex::ZERO, -1.0, 2.0),
            Err(ComplexRectError::EmptySize {
                width: -1.0,
                height: 2.0
            })
        );
        assert_eq!(
            ComplexRect::new(Complex::ZERO, 1.0, 0.0),
            Err(ComplexRectError::EmptySize {
                width: 1.0,
                height: 0.0
            })
        );
    }

    #[test]
    fn test_new_rejects_nan_extent() {
        assert!(ComplexRect::new(Complex::ZERO, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_mandelbrot_view_spans_the_classic_window() {
        let view = ComplexRect::mandelbrot_view();

        assert_eq!(view.top_left(), Complex::new(-2.5, -1.0));
        assert_eq!(view.bottom_right(), Complex::new(1.0, 1.0));
    }
}
