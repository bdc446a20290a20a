//! Still-Image Input
//!
//! Provides the decoded RGB bitmap type consumed by the classification
//! pipeline and the acquisition boundary behind which camera or gallery
//! collaborators live.

pub mod bitmap;
pub mod source;

pub use bitmap::Bitmap;
pub use source::{FileImageSource, ImageSource};

use thiserror::Error;

/// Image input error types
#[derive(Error, Debug)]
pub enum ImageInputError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Invalid bitmap dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel buffer holds {actual} bytes, a {width}x{height} RGB bitmap needs {expected}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
