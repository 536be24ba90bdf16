use crate::core::actions::cancellation::{CancelToken, Cancelled, CANCEL_CHECK_INTERVAL_POINTS};
use crate::core::actions::render_escape_time::render_escape_time::{
    sample_pixel, RenderEscapeTimeError,
};
use crate::core::data::coloured_point::ColouredPoint;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::colouring::algorithm::ColouringAlgorithm;
use crate::core::fractals::escape_time::EscapeTime;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

/// Error type for the cancel-aware render.
///
/// Cancellation is expected control flow rather than a failure to report,
/// so it gets its own variant for callers to match on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderEscapeTimeCancelableError {
    Cancelled(Cancelled),
    Coords(PixelToComplexCoordsError),
}

impl fmt::Display for RenderEscapeTimeCancelableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(cancelled) => write!(f, "{}", cancelled),
            Self::Coords(err) => write!(f, "coordinate mapping error: {}", err),
        }
    }
}

impl Error for RenderEscapeTimeCancelableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(cancelled) => Some(cancelled),
            Self::Coords(err) => Some(err),
        }
    }
}

impl From<RenderEscapeTimeError> for RenderEscapeTimeCancelableError {
    fn from(err: RenderEscapeTimeError) -> Self {
        match err {
            RenderEscapeTimeError::Coords(inner) => Self::Coords(inner),
        }
    }
}

/// Sequential render that polls a cancellation token every
/// [`CANCEL_CHECK_INTERVAL_POINTS`] pixels and stops early when it fires.
/// Checks land between trials only, so a cancelled run never leaves a
/// half-iterated point behind.
pub fn render_escape_time_cancelable<C: CancelToken>(
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    engine: &EscapeTime,
    colouring: &mut dyn ColouringAlgorithm,
    cancel: &C,
) -> Result<Vec<ColouredPoint>, RenderEscapeTimeCancelableError> {
    let mut samples = Vec::with_capacity(pixel_rect.pixel_count() as usize);

    for (i, pixel) in pixel_rect.points().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_POINTS == 0 && cancel.is_cancelled() {
            return Err(RenderEscapeTimeCancelableError::Cancelled(Cancelled));
        }

        let sample = sample_pixel(pixel, pixel_rect, complex_rect, engine, colouring)?;
        samples.push(sample);
    }

    Ok(samples)
}
