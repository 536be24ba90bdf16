use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::data::colour::Colour;

/// Black-body ramp over a palette: black through red and orange to
/// near-white. The top index is the interior/limit slot and stays black.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FireGradient {
    depth: u32,
}

impl FireGradient {
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self {
            depth: depth.max(1),
        }
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl ColourMap for FireGradient {
    type Failure = ColourMapError;

    fn map(&self, palette_index: u32) -> Result<Colour, ColourMapError> {
        if palette_index >= self.depth {
            return Err(ColourMapError::IndexExceedsDepth {
                palette_index,
                depth: self.depth,
            });
        }

        if palette_index == self.depth - 1 {
            return Ok(Colour::BLACK);
        }

        let t = f64::from(palette_index) / f64::from(self.depth);

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        "Fire gradient"
    }
}
