/// Non-linear post-transform composed after an affine map, following the
/// flame-fractal convention. Variations are pure point maps and are not
/// required to be bijective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variation {
    Linear,
    Sinusoidal,
    Spherical,
    Swirl,
    Horseshoe,
}

impl Variation {
    pub const ALL: &'static [Self] = &[
        Self::Linear,
        Self::Sinusoidal,
        Self::Spherical,
        Self::Swirl,
        Self::Horseshoe,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Sinusoidal => "sinusoidal",
            Self::Spherical => "spherical",
            Self::Swirl => "swirl",
            Self::Horseshoe => "horseshoe",
        }
    }

    /// Resolves a document name. Names are the lowercase display names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|variation| variation.display_name() == name)
    }

    #[must_use]
    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        let r = (x * x + y * y).sqrt();

        match self {
            Self::Linear => (x, y),
            Self::Sinusoidal => (x.sin(), y.sin()),
            Self::Spherical => (x / (r * r), y / (r * r)),
            Self::Swirl => (
                x * r.sin() - y * r.cos(),
                x * r.cos() + y * r.sin(),
            ),
            Self::Horseshoe => ((x - y) / r, (x + y) / r),
        }
    }
}

impl std::fmt::Display for Variation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
