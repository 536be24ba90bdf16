use crate::core::data::coloured_point::ColouredPoint;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::iteration_point::IterationPoint;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::colouring::algorithm::ColouringAlgorithm;
use crate::core::fractals::escape_time::EscapeTime;
use crate::core::fractals::listener::IterationListener;
use crate::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, PixelToComplexCoordsError,
};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderEscapeTimeError {
    Coords(PixelToComplexCoordsError),
}

impl fmt::Display for RenderEscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coords(err) => write!(f, "coordinate mapping error: {}", err),
        }
    }
}

impl Error for RenderEscapeTimeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Coords(err) => Some(err),
        }
    }
}

impl From<PixelToComplexCoordsError> for RenderEscapeTimeError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Coords(err)
    }
}

/// Runs one escape-time trial per pixel of `pixel_rect` and returns the
/// samples in row-major order.
///
/// The colouring algorithm listens to every trial, so stateful colourings
/// see the full orbit before their index is read. For a cancel-aware run,
/// use [`render_escape_time_cancelable`]; for a parallel run, use
/// [`render_escape_time_rayon`].
///
/// [`render_escape_time_cancelable`]: super::render_escape_time_cancelable::render_escape_time_cancelable
/// [`render_escape_time_rayon`]: super::render_escape_time_rayon::render_escape_time_rayon
pub fn render_escape_time(
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    engine: &EscapeTime,
    colouring: &mut dyn ColouringAlgorithm,
) -> Result<Vec<ColouredPoint>, RenderEscapeTimeError> {
    pixel_rect
        .points()
        .map(|pixel| sample_pixel(pixel, pixel_rect, complex_rect, engine, colouring))
        .collect()
}

/// One sample: place the pixel on the complex window, run the trial with
/// the colouring listening, then read the palette index off the finished
/// point.
pub(crate) fn sample_pixel(
    pixel: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    engine: &EscapeTime,
    colouring: &mut dyn ColouringAlgorithm,
) -> Result<ColouredPoint, RenderEscapeTimeError> {
    let pixel_value = pixel_to_complex_coords(pixel, pixel_rect, complex_rect)?;
    let mut point = IterationPoint::new(pixel, pixel_value);

    engine.iterate(
        &mut point,
        &mut [&mut *colouring as &mut dyn IterationListener],
    );
    let palette_index = colouring.palette_index(&point);

    Ok(ColouredPoint {
        point,
        palette_index,
    })
}
