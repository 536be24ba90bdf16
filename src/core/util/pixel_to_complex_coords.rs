use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel inside `pixel_rect` to its complex value in `complex_rect`.
/// The corner pixels land exactly on the window corners; everything else is
/// linear in between.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = f64::from(pixel_position.x - pixel_rect.top_left().x);
    let relative_pixel_y = f64::from(pixel_position.y - pixel_rect.top_left().y);
    let real = complex_rect.top_left().real
        + (relative_pixel_x / f64::from(pixel_rect.width() - 1)) * complex_rect.width();
    let imag = complex_rect.top_left().imag
        + (relative_pixel_y / f64::from(pixel_rect.height() - 1)) * complex_rect.height();

    Ok(Complex { real, imag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complex_rect(real: f64, imag: f64, width: f64, height: f64) -> ComplexRect {
        ComplexRect::new(Complex { real, imag }, width, height).unwrap()
    }

    #[test]
    fn test_top_left_pixel_maps_to_the_window_corner() {
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, 101, 101).unwrap();
        let window = complex_rect(-2.0, -1.0, 3.0, 2.0);

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, pixel_rect, window);

        assert_eq!(result, Ok(Complex::new(-2.0, -1.0)));
    }

    #[test]
    fn test_bottom_right_pixel_maps_to_the_window_corner() {
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, 101, 101).unwrap();
        let window = complex_rect(-2.0, -1.0, 3.0, 2.0);

        let result = pixel_to_complex_coords(Point { x: 100, y: 100 }, pixel_rect, window);

        assert_eq!(result, Ok(Complex::new(1.0, 1.0)));
    }

    #[test]
    fn test_centre_pixel_maps_to_the_window_centre() {
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, 101, 101).unwrap();
        let window = complex_rect(-1.0, -1.0, 2.0, 2.0);

        let result = pixel_to_complex_coords(Point { x: 50, y: 50 }, pixel_rect, window);

        assert_eq!(result, Ok(Complex::ZERO));
    }

    #[test]
    fn test_offset_pixel_rects_map_relative_positions() {
        let pixel_rect = PixelRect::new(Point { x: 10, y: 20 }, 101, 101).unwrap();
        let window = complex_rect(0.0, 0.0, 1.0, 1.0);

        let result = pixel_to_complex_coords(Point { x: 10, y: 120 }, pixel_rect, window);

        assert_eq!(result, Ok(Complex::new(0.0, 1.0)));
    }

    #[test]
    fn test_pixel_outside_the_rect_fails() {
        let point1 = Point { x: 150, y: 150 };
        let point2 = Point { x: -10, y: -10 };
        let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, 101, 101).unwrap();
        let window = complex_rect(-1.0, -1.0, 2.0, 2.0);

        let result1 = pixel_to_complex_coords(point1, pixel_rect, window);
        let result2 = pixel_to_complex_coords(point2, pixel_rect, window);

        assert_eq!(
            result1,
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point: point1,
                pixel_rect
            })
        );
        assert_eq!(
            result2,
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point: point2,
                pixel_rect
            })
        );
    }
}
