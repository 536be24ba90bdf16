use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;
use std::path::Path;

/// Writes the buffer as a binary PPM file.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(&filepath)?;

    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;
    file.write_all(buffer.data())?;

    log::debug!(
        "wrote {}x{} PPM ({} data bytes) to {}",
        width,
        height,
        buffer.data().len(),
        filepath.as_ref().display()
    );

    Ok(())
}
