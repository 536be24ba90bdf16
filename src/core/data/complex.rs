use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseComplexError {
    InvalidFormat { input: String },
    SignAfterMarker { input: String },
}

impl fmt::Display for ParseComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { input } => {
                write!(
                    f,
                    "'{}' is neither standard notation (a+bi) nor pair notation (a, b)",
                    input
                )
            }
            Self::SignAfterMarker { input } => {
                write!(
                    f,
                    "'{}' places a sign after the imaginary unit marker",
                    input
                )
            }
        }
    }
}

impl Error for ParseComplexError {}

/// Complex value with exact component equality. Ordering by modulus is
/// deliberately not `PartialOrd`: two distinct values can share a modulus,
/// which would contradict the derived equality. Use `cmp_by_modulus` and
/// friends instead.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    pub const ONE: Self = Self {
        real: 1.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn modulus_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Distance from the origin. Skips the sqrt entirely for the origin
    /// itself so the zero case stays exact.
    #[must_use]
    pub fn modulus(&self) -> f64 {
        if self.real == 0.0 && self.imag == 0.0 {
            return 0.0;
        }
        self.modulus_squared().sqrt()
    }

    /// Principal argument in `(-π, π]`. The origin yields 0 per the
    /// `atan2(0, 0)` convention; callers that care must test for zero first.
    #[must_use]
    pub fn argument(&self) -> f64 {
        self.imag.atan2(self.real)
    }

    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    #[must_use]
    pub fn exp(&self) -> Self {
        let scale = self.real.exp();
        Self {
            real: scale * self.imag.cos(),
            imag: scale * self.imag.sin(),
        }
    }

    /// Principal branch logarithm, branch cut along the negative real axis.
    #[must_use]
    pub fn ln(&self) -> Self {
        Self {
            real: self.modulus().ln(),
            imag: self.argument(),
        }
    }

    /// Principal square root, branch cut along the negative real axis.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        let root = self.modulus().sqrt();
        let half_arg = self.argument() / 2.0;
        Self {
            real: root * half_arg.cos(),
            imag: root * half_arg.sin(),
        }
    }

    /// Integer power by repeated multiplication. `powu(0)` is one; the
    /// quadratic case is the single multiply the iteration loops lean on.
    #[must_use]
    pub fn powu(&self, exponent: u32) -> Self {
        match exponent {
            0 => Self::ONE,
            1 => *self,
            2 => *self * *self,
            _ => {
                let mut result = *self * *self;
                for _ in 2..exponent {
                    result = result * *self;
                }
                result
            }
        }
    }

    #[must_use]
    pub fn sin(&self) -> Self {
        Self {
            real: self.real.sin() * self.imag.cosh(),
            imag: self.real.cos() * self.imag.sinh(),
        }
    }

    #[must_use]
    pub fn cos(&self) -> Self {
        Self {
            real: self.real.cos() * self.imag.cosh(),
            imag: -self.real.sin() * self.imag.sinh(),
        }
    }

    #[must_use]
    pub fn tan(&self) -> Self {
        self.sin() / self.cos()
    }

    #[must_use]
    pub fn sinh(&self) -> Self {
        Self {
            real: self.real.sinh() * self.imag.cos(),
            imag: self.real.cosh() * self.imag.sin(),
        }
    }

    #[must_use]
    pub fn cosh(&self) -> Self {
        Self {
            real: self.real.cosh() * self.imag.cos(),
            imag: self.real.sinh() * self.imag.sin(),
        }
    }

    #[must_use]
    pub fn tanh(&self) -> Self {
        self.sinh() / self.cosh()
    }

    #[must_use]
    pub fn floor(&self) -> Self {
        Self {
            real: self.real.floor(),
            imag: self.imag.floor(),
        }
    }

    #[must_use]
    pub fn ceil(&self) -> Self {
        Self {
            real: self.real.ceil(),
            imag: self.imag.ceil(),
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    #[must_use]
    pub fn cmp_by_modulus(&self, other: &Self) -> Ordering {
        self.modulus().total_cmp(&other.modulus())
    }

    #[must_use]
    pub fn min_by_modulus(self, other: Self) -> Self {
        if other.cmp_by_modulus(&self) == Ordering::Less {
            other
        } else {
            self
        }
    }

    #[must_use]
    pub fn max_by_modulus(self, other: Self) -> Self {
        if other.cmp_by_modulus(&self) == Ordering::Greater {
            other
        } else {
            self
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Add<f64> for Complex {
    type Output = Self;

    fn add(self, scalar: f64) -> Self {
        Self {
            real: self.real + scalar,
            imag: self.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Sub<f64> for Complex {
    type Output = Self;

    fn sub(self, scalar: f64) -> Self {
        Self {
            real: self.real - scalar,
            imag: self.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            real: self.real * scalar,
            imag: self.imag * scalar,
        }
    }
}

impl Div for Complex {
    type Output = Self;

    // Division by zero is not trapped: the components go to NaN/Inf and the
    // iteration loops classify whatever comes out.
    fn div(self, other: Self) -> Self {
        let denominator = other.modulus_squared();
        Self {
            real: (self.real * other.real + self.imag * other.imag) / denominator,
            imag: (self.imag * other.real - self.real * other.imag) / denominator,
        }
    }
}

impl Div<f64> for Complex {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self {
            real: self.real / scalar,
            imag: self.imag / scalar,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl DivAssign for Complex {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imag.is_sign_negative() {
            write!(f, "{}{}i", self.real, self.imag)
        } else {
            write!(f, "{}+{}i", self.real, self.imag)
        }
    }
}

impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.starts_with('(') {
            parse_pair(trimmed, input)
        } else {
            parse_standard(trimmed, input)
        }
    }
}

/// Standard notation `a+bi` / `a-bi`. The split point is the last sign that
/// is neither leading nor part of a scientific exponent; the marker must be
/// the final character. Component text is anything `f64` accepts, `inf` and
/// `NaN` included.
fn parse_standard(trimmed: &str, input: &str) -> Result<Complex, ParseComplexError> {
    let invalid = || ParseComplexError::InvalidFormat {
        input: input.to_string(),
    };

    let body = match trimmed.strip_suffix('i') {
        Some(body) => body,
        None => {
            // `2i+1` writes the marker before the split sign. Only the tail
            // past the last `i` counts: `inf` and `infinity` components
            // legitimately contain the letter.
            let misplaced_sign = trimmed
                .rfind('i')
                .is_some_and(|marker| trimmed[marker + 1..].contains(['+', '-']));
            if misplaced_sign {
                return Err(ParseComplexError::SignAfterMarker {
                    input: input.to_string(),
                });
            }
            return Err(invalid());
        }
    };

    let mut split = None;
    let mut previous = ' ';
    for (index, character) in body.char_indices() {
        if index > 0
            && (character == '+' || character == '-')
            && previous != 'e'
            && previous != 'E'
        {
            split = Some(index);
        }
        previous = character;
    }
    let split = split.ok_or_else(invalid)?;

    let (real_part, imag_part) = body.split_at(split);
    let real = real_part.trim().parse::<f64>().map_err(|_| invalid())?;
    let imag = imag_part.trim().parse::<f64>().map_err(|_| invalid())?;

    Ok(Complex { real, imag })
}

/// Pair notation `(a, b)`.
fn parse_pair(trimmed: &str, input: &str) -> Result<Complex, ParseComplexError> {
    let invalid = || ParseComplexError::InvalidFormat {
        input: input.to_string(),
    };

    let body = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let (real_part, imag_part) = body.split_once(',').ok_or_else(invalid)?;
    let real = real_part.trim().parse::<f64>().map_err(|_| invalid())?;
    let imag = imag_part.trim().parse::<f64>().map_err(|_| invalid())?;

    Ok(Complex { real, imag })
}
