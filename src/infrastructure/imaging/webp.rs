use ::webp::Encoder;
use image::DynamicImage;

use crate::errors::AppError;

/// Lossy WebP through libwebp. Out-of-range qualities are rejected by the encoder.
pub fn encode_webp(image: &DynamicImage, quality: i32) -> Result<Vec<u8>, AppError> {
    let encoded = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height())
            .encode_simple(false, quality as f32)
    } else {
        let rgb = image.to_rgb8();
        Encoder::from_rgb(rgb.as_raw(), rgb.width(), rgb.height())
            .encode_simple(false, quality as f32)
    }
    .map_err(|e| AppError::ProcessingError(format!("WebP encoding failed: {:?}", e)))?;

    Ok(encoded.to_vec())
}
