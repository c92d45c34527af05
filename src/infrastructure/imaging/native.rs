use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::errors::AppError;

/// Writes the image back in its source format with the codec's default settings.
pub fn encode_native(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, AppError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, format)?;

    Ok(buffer.into_inner())
}
