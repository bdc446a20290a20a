//! Bitmap to input-tensor conversion

use crate::EncodeError;
use image::imageops::{self, FilterType};
use image_input::Bitmap;
use model_runtime::TensorShape;
use tracing::debug;

/// Encode a bitmap into a model's flat input tensor.
///
/// The bitmap is stretched to the model's input size with triangle
/// (bilinear) filtering; aspect ratio is not preserved. Pixels are walked in
/// strict row-major order: outer loop over rows, inner loop over columns,
/// pixel index `y * width + x`. Each pixel contributes its R, G, B channel
/// values normalized to [0.0, 1.0] by dividing by 255.
pub fn encode(bitmap: &Bitmap, shape: &TensorShape) -> Result<Vec<f32>, EncodeError> {
    if bitmap.width() == 0 || bitmap.height() == 0 {
        return Err(EncodeError::InvalidInput(format!(
            "bitmap has degenerate dimensions {}x{}",
            bitmap.width(),
            bitmap.height()
        )));
    }
    if shape.width == 0 || shape.height == 0 {
        return Err(EncodeError::InvalidInput(format!(
            "target shape has degenerate dimensions {}x{}",
            shape.width, shape.height
        )));
    }
    if shape.channels != 3 {
        return Err(EncodeError::InvalidInput(format!(
            "target shape declares {} channels, the encoder produces RGB",
            shape.channels
        )));
    }

    let resized = imageops::resize(
        &bitmap.to_rgb_image(),
        shape.width as u32,
        shape.height as u32,
        FilterType::Triangle,
    );

    let mut tensor = Vec::with_capacity(shape.element_count());
    for y in 0..shape.height as u32 {
        for x in 0..shape.width as u32 {
            let pixel = resized.get_pixel(x, y);
            tensor.push(pixel[0] as f32 / 255.0);
            tensor.push(pixel[1] as f32 / 255.0);
            tensor.push(pixel[2] as f32 / 255.0);
        }
    }

    debug!(
        "Encoded {}x{} bitmap into {}-element tensor",
        bitmap.width(),
        bitmap.height(),
        tensor.len()
    );
    Ok(tensor)
}
