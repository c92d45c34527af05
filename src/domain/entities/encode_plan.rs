use image::ImageFormat;

use crate::{
    constants::{PNG_BALANCED_COMPRESSION, PNG_MAX_COMPRESSION, PNG_QUALITY_THRESHOLD},
    entities::upload::SourceFormat,
};

/// Encoder parameters chosen for one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodePlan {
    /// Alpha is dropped before encoding, not composited.
    Jpeg { quality: i32, optimize: bool },
    /// Always adaptive-filtered.
    Png { compression_level: u8 },
    WebP { quality: i32 },
    /// Same-format re-encode; quality has no generic meaning here.
    Native { format: ImageFormat },
}

impl EncodePlan {
    /// Dispatch table from detected format to encoder settings.
    ///
    /// | detected        | plan                                         |
    /// |-----------------|----------------------------------------------|
    /// | JPEG / unknown  | JPEG at `quality`, optimized                 |
    /// | PNG             | PNG, level 9 below quality 50, else level 6  |
    /// | WEBP            | lossy WebP at `quality`                      |
    /// | anything else   | same format, quality ignored                 |
    pub fn select(format: SourceFormat, quality: i32) -> Self {
        match format {
            SourceFormat::Jpeg | SourceFormat::Unknown => EncodePlan::Jpeg {
                quality,
                optimize: true,
            },
            SourceFormat::Png => EncodePlan::Png {
                compression_level: if quality < PNG_QUALITY_THRESHOLD {
                    PNG_MAX_COMPRESSION
                } else {
                    PNG_BALANCED_COMPRESSION
                },
            },
            SourceFormat::WebP => EncodePlan::WebP { quality },
            SourceFormat::Other(format) => EncodePlan::Native { format },
        }
    }
}
