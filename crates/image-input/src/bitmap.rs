//! Decoded bitmap type

use crate::ImageInputError;
use image::{DynamicImage, RgbImage};

/// Decoded RGB still image
///
/// Pixel data is tightly packed row-major RGB with no alpha channel, so the
/// buffer length is always `width * height * 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// RGB pixel data (width * height * 3), row-major
    data: Vec<u8>,
    /// Bitmap width in pixels
    width: u32,
    /// Bitmap height in pixels
    height: u32,
}

impl Bitmap {
    /// Create a bitmap from raw RGB data
    pub fn from_rgb(data: Vec<u8>, width: u32, height: u32) -> Result<Self, ImageInputError> {
        if width == 0 || height == 0 {
            return Err(ImageInputError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(ImageInputError::BufferSize {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Convert a decoded image, dropping any alpha channel
    pub fn from_dynamic(img: DynamicImage) -> Result<Self, ImageInputError> {
        let (width, height) = (img.width(), img.height());
        if width == 0 || height == 0 {
            return Err(ImageInputError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data: img.into_rgb8().into_raw(),
            width,
            height,
        })
    }

    /// Decode a bitmap from an in-memory encoded image (PNG, JPEG, ...)
    pub fn from_encoded(bytes: &[u8]) -> Result<Self, ImageInputError> {
        let img = image::load_from_memory(bytes)?;
        Self::from_dynamic(img)
    }

    /// Bitmap width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Bitmap height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB pixel data, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get pixel at (x, y)
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// View the bitmap as an image buffer for resampling
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_raw(self.width, self.height, self.data.clone())
            .expect("bitmap buffer length matches its dimensions")
    }
}
