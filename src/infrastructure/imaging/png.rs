use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    DynamicImage,
};

use crate::errors::AppError;

/// Lossless re-encode with adaptive filtering; colour type, alpha included, is kept as decoded.
pub fn encode_png(image: &DynamicImage, compression_level: u8) -> Result<Vec<u8>, AppError> {
    let compression = match compression_level {
        0..=3 => CompressionType::Fast,
        4..=8 => CompressionType::Default,
        _ => CompressionType::Best,
    };

    let mut buffer = Vec::new();
    image.write_with_encoder(PngEncoder::new_with_quality(
        &mut buffer,
        compression,
        FilterType::Adaptive,
    ))?;

    Ok(buffer)
}
