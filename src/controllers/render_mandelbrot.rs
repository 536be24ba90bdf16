use std::path::Path;
use std::time::Instant;

use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::render_escape_time::render_escape_time_rayon::render_escape_time_rayon;
use crate::core::colour_maps::fire_gradient::FireGradient;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::colouring::algorithm::DEFAULT_PALETTE_DEPTH;
use crate::core::fractals::colouring::factory::colouring_factory;
use crate::core::fractals::colouring::kinds::ColouringKinds;
use crate::core::fractals::escape_time::{EscapeTime, EscapeTimeSettings};
use crate::core::fractals::formula::FractalFormula;
use crate::storage::write_ppm::write_ppm;

/// Renders the classic Mandelbrot view to a binary PPM at `filepath`.
pub fn render_mandelbrot_controller(
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let width: u32 = 800;
    let height: u32 = 600;
    let settings = EscapeTimeSettings::default();

    let pixel_rect = PixelRect::new(Point { x: 0, y: 0 }, width, height)?;
    let complex_rect = ComplexRect::mandelbrot_view();
    let engine = EscapeTime::new(FractalFormula::mandelbrot(), settings)?;

    log::info!(
        "rendering Mandelbrot set: {}x{} pixels, max {} iterations",
        width,
        height,
        settings.max_iterations
    );

    let start = Instant::now();
    let samples = render_escape_time_rayon(pixel_rect, complex_rect, &engine, || {
        colouring_factory(
            ColouringKinds::SmoothedEscapeTime,
            DEFAULT_PALETTE_DEPTH,
            settings,
        )
    })?;
    log::info!("rendered {} samples in {:?}", samples.len(), start.elapsed());

    let colour_map = FireGradient::new(DEFAULT_PALETTE_DEPTH);
    let buffer = generate_pixel_buffer(&samples, &colour_map, pixel_rect)?;
    write_ppm(&buffer, &filepath)?;
    log::info!("saved {}", filepath.as_ref().display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_a_ppm_to_the_given_path() {
        let filepath = std::env::temp_dir().join("fractal_engine_render_mandelbrot_test.ppm");

        let result = render_mandelbrot_controller(&filepath);

        assert!(result.is_ok());
        let written = std::fs::read(&filepath).unwrap();
        std::fs::remove_file(&filepath).unwrap();
        assert_eq!(&written[..3], b"P6\n");
        assert_eq!(written.len(), b"P6\n800 600\n255\n".len() + 800 * 600 * 3);
    }
}
