use std::io::Cursor;

use image::ImageReader;

use crate::{
    codecs::codec::Codec,
    entities::{
        encode_plan::EncodePlan,
        upload::{DecodedImage, SourceFormat},
    },
    errors::AppError,
    imaging::{jpeg::encode_jpeg, native::encode_native, png::encode_png, webp::encode_webp},
};

/// Codec backed by `image` for detection and decoding, mozjpeg for JPEG and libwebp for WebP.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec;

impl ImageCodec {
    pub fn new() -> Self {
        ImageCodec
    }
}

impl Codec for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, AppError> {
        let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
        let format = SourceFormat::from(reader.format());
        let image = reader.decode()?;

        Ok(DecodedImage { image, format })
    }

    fn encode(&self, decoded: &DecodedImage, plan: &EncodePlan) -> Result<Vec<u8>, AppError> {
        match *plan {
            EncodePlan::Jpeg { quality, optimize } => encode_jpeg(&decoded.image, quality, optimize),
            EncodePlan::Png { compression_level } => encode_png(&decoded.image, compression_level),
            EncodePlan::WebP { quality } => encode_webp(&decoded.image, quality),
            EncodePlan::Native { format } => encode_native(&decoded.image, format),
        }
    }
}
