use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel ({}, {}) outside buffer rect {}x{} at ({}, {})",
                    pixel.x,
                    pixel.y,
                    pixel_rect.width(),
                    pixel_rect.height(),
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Packed row-major RGB byte buffer covering one pixel rect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    data: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let bytes = pixel_rect.pixel_count() as usize * 3;
        Self {
            pixel_rect,
            data: vec![0; bytes],
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn set(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.pixel_rect.index_of(pixel).ok_or(
            PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            },
        )? * 3;

        self.data[index] = colour.r;
        self.data[index + 1] = colour.g;
        self.data[index + 2] = colour.b;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(width: u32, height: u32) -> PixelRect {
        PixelRect::new(Point { x: 0, y: 0 }, width, height).unwrap()
    }

    #[test]
    fn test_new_allocates_three_zeroed_bytes_per_pixel() {
        let buffer = PixelBuffer::new(rect(10, 5));

        assert_eq!(buffer.data().len(), 150);
        assert!(buffer.data().iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_set_writes_rgb_triplet_row_major() {
        let mut buffer = PixelBuffer::new(rect(3, 3));
        buffer
            .set(Point { x: 1, y: 1 }, Colour { r: 10, g: 20, b: 30 })
            .unwrap();

        assert_eq!(&buffer.data()[12..15], &[10, 20, 30]);
    }

    #[test]
    fn test_set_respects_offset_origins() {
        let pixel_rect = PixelRect::new(Point { x: 10, y: 20 }, 3, 3).unwrap();
        let mut buffer = PixelBuffer::new(pixel_rect);

        buffer
            .set(Point { x: 11, y: 21 }, Colour { r: 1, g: 2, b: 3 })
            .unwrap();

        assert_eq!(&buffer.data()[12..15], &[1, 2, 3]);
    }

    #[test]
    fn test_set_rejects_pixels_outside_rect() {
        let pixel_rect = rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);

        let result = buffer.set(Point { x: 3, y: 0 }, Colour::BLACK);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: 3, y: 0 },
                pixel_rect
            })
        );
    }
}
