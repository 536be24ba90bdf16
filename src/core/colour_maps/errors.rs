use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColourMapError {
    IndexExceedsDepth { palette_index: u32, depth: u32 },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexExceedsDepth {
                palette_index,
                depth,
            } => {
                write!(
                    f,
                    "palette index {} outside depth {}",
                    palette_index, depth
                )
            }
        }
    }
}

impl Error for ColourMapError {}
