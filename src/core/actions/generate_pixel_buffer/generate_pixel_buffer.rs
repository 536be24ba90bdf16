use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::coloured_point::ColouredPoint;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => err.source(),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Paints rendered samples into an RGB buffer covering `pixel_rect`.
///
/// Each sample is placed at its own pixel, so the input order does not
/// matter and partial renders leave the untouched pixels black. A sample
/// outside the rect or a palette index the mapper refuses fails the whole
/// buffer.
pub fn generate_pixel_buffer<CMap>(
    samples: &[ColouredPoint],
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap,
    CMap::Failure: 'static,
{
    let mut buffer = PixelBuffer::new(pixel_rect);

    for sample in samples {
        let colour = mapper
            .map(sample.palette_index)
            .map_err(|err| GeneratePixelBufferError::ColourMap(Box::new(err)))?;
        buffer.set(sample.point.pixel(), colour)?;
    }

    Ok(buffer)
}
