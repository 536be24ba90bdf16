use rayon::prelude::*;

use crate::core::actions::render_escape_time::render_escape_time::{
    sample_pixel, RenderEscapeTimeError,
};
use crate::core::data::coloured_point::ColouredPoint;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::colouring::algorithm::ColouringAlgorithm;
use crate::core::fractals::escape_time::EscapeTime;

/// Renders escape-time samples in parallel on rayon's work-stealing pool.
///
/// Colouring algorithms carry per-trial state, so each worker gets its own
/// instance from `make_colouring` instead of sharing one. Output order
/// matches the sequential render.
pub fn render_escape_time_rayon<F>(
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    engine: &EscapeTime,
    make_colouring: F,
) -> Result<Vec<ColouredPoint>, RenderEscapeTimeError>
where
    F: Fn() -> Box<dyn ColouringAlgorithm> + Sync + Send,
{
    let pixels: Vec<Point> = pixel_rect.points().collect();

    pixels
        .into_par_iter()
        .map_init(make_colouring, |colouring, pixel| {
            sample_pixel(pixel, pixel_rect, complex_rect, engine, colouring.as_mut())
        })
        .collect()
}
