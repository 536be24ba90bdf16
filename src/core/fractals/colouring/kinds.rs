#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColouringKinds {
    SmoothedEscapeTime,
    TriangleGrid,
}

impl ColouringKinds {
    pub const ALL: &'static [Self] = &[Self::SmoothedEscapeTime, Self::TriangleGrid];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SmoothedEscapeTime => "Smoothed escape time",
            Self::TriangleGrid => "Triangle grid",
        }
    }
}

impl Default for ColouringKinds {
    fn default() -> Self {
        Self::SmoothedEscapeTime
    }
}

impl std::fmt::Display for ColouringKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
