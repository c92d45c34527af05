use image::{DynamicImage, GenericImageView};
use mozjpeg::{ColorSpace, Compress};

use crate::errors::AppError;

/// Encodes with mozjpeg. `optimize` turns on optimized Huffman tables.
///
/// Transparency is discarded: RGBA and LA inputs lose their alpha channel and
/// transparent pixels keep whatever colour they store underneath.
pub fn encode_jpeg(image: &DynamicImage, quality: i32, optimize: bool) -> Result<Vec<u8>, AppError> {
    let (width, height) = image.dimensions();
    let (color_space, pixels) = flatten_for_jpeg(image);

    let mut comp = Compress::new(color_space);
    comp.set_size(width as usize, height as usize);
    comp.set_quality(quality as f32);
    comp.set_optimize_coding(optimize);

    let mut started = comp.start_compress(Vec::new())?;
    started.write_scanlines(&pixels)?;
    let jpeg = started.finish()?;

    Ok(jpeg)
}

fn flatten_for_jpeg(image: &DynamicImage) -> (ColorSpace, Vec<u8>) {
    match image {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageLuma16(_) => {
            (ColorSpace::JCS_GRAYSCALE, image.to_luma8().into_raw())
        }
        _ => (ColorSpace::JCS_RGB, image.to_rgb8().into_raw()),
    }
}
