pub mod analyzer;
pub mod difference;
pub mod enhance;
pub mod loader;
pub mod resize;

pub use analyzer::{DiffAnalyzer, DiffReport, analyze};
pub use enhance::EnhanceConfig;
pub use resize::ResizeDecision;

use image::RgbImage;
use std::{fmt, path::PathBuf};

/// Multiplier applied to raw differences when the caller does not pick one.
pub const DEFAULT_ENHANCEMENT_FACTOR: f32 = 20.0;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Image file {slot} not found: {}", .path.display())]
    MissingFile { slot: ImageSlot, path: PathBuf },

    #[error("Failed to read image {slot} from {}: {source}", .path.display())]
    Read {
        slot: ImageSlot,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {slot} from {}: {source}", .path.display())]
    Decode {
        slot: ImageSlot,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode result to {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image dimensions differ: {left:?} vs {right:?}")]
    DimensionMismatch { left: (u32, u32), right: (u32, u32) },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),


    #[error("Image resize error: {0}")]
    ImageResize(#[from] fast_image_resize::ResizeError),

    #[error("Image buffer error: {0}")]
    ImageBufferError(#[from] fast_image_resize::ImageBufferError),
}

/// Which of the two compared inputs a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    A,
    B,
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSlot::A => write!(f, "A"),
            ImageSlot::B => write!(f, "B"),
        }
    }
}

pub trait Effect {
    fn apply(&self, image: &mut RgbImage) -> Result<()>;
}
