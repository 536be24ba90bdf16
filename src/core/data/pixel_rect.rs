use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    EmptySize { width: u32, height: u32 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySize { width, height } => {
                write!(
                    f,
                    "pixel rect needs at least 2x2 pixels, got {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for PixelRectError {}

/// Axis-aligned pixel region addressed by its top-left corner and extent.
/// At least 2x2 so the viewport mapping always has a non-degenerate span.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(top_left: Point, width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width < 2 || height < 2 {
            return Err(PixelRectError::EmptySize { width, height });
        }

        Ok(Self {
            top_left,
            width,
            height,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point {
            x: self.top_left.x + self.width as i32 - 1,
            y: self.top_left.y + self.height as i32 - 1,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        let bottom_right = self.bottom_right();
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && point.x <= bottom_right.x
            && point.y <= bottom_right.y
    }

    /// Row-major pass over every pixel in the rect.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let top_left = self.top_left;
        let width = self.width as i32;
        let height = self.height as i32;

        (0..height).flat_map(move |dy| {
            (0..width).map(move |dx| Point {
                x: top_left.x + dx,
                y: top_left.y + dy,
            })
        })
    }

    /// Flat row-major index of a contained pixel.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        let dx = (point.x - self.top_left.x) as usize;
        let dy = (point.y - self.top_left.y) as usize;
        Some(dy * self.width as usize + dx)
    }
}
