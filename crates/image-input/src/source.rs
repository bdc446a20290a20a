//! Image acquisition boundary

use crate::{Bitmap, ImageInputError};
use std::path::PathBuf;
use tracing::debug;

/// Supplies the next bitmap to classify.
///
/// Camera capture and gallery pickers implement this so the pipeline never
/// depends on a UI framework type.
pub trait ImageSource {
    /// Produce a decoded bitmap
    fn supply(&self) -> Result<Bitmap, ImageInputError>;
}

/// Reads and decodes an image file on demand
pub struct FileImageSource {
    path: PathBuf,
}

impl FileImageSource {
    /// Create a source backed by an image file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source decodes from
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ImageSource for FileImageSource {
    fn supply(&self) -> Result<Bitmap, ImageInputError> {
        debug!("Decoding image from {}", self.path.display());
        let img = image::open(&self.path)?;
        Bitmap::from_dynamic(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_a_decode_error() {
        let source = FileImageSource::new("/nonexistent/picture.png");
        let err = source.supply().unwrap_err();
        assert!(matches!(err, ImageInputError::Decode(_)));
    }
}
