#![allow(dead_code)]

use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

pub fn rgba_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 7) as u8, (y * 5) as u8, ((x + y) * 3) as u8, if x % 2 == 0 { 0 } else { 200 }])
    }))
}

pub fn rgb_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 3) as u8, (y * 4) as u8, ((x * y) % 255) as u8])
    }))
}

pub fn gray_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| Luma([((x + y) * 2) as u8])))
}

pub fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, format).expect("Failed to encode fixture");
    buffer.into_inner()
}

pub fn rgba_png(width: u32, height: u32) -> Vec<u8> {
    encode(&rgba_image(width, height), ImageFormat::Png)
}

pub fn rgb_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(&rgb_image(width, height), ImageFormat::Jpeg)
}

pub fn rgba_webp(width: u32, height: u32) -> Vec<u8> {
    encode(&rgba_image(width, height), ImageFormat::WebP)
}

pub fn rgb_bmp(width: u32, height: u32) -> Vec<u8> {
    encode(&rgb_image(width, height), ImageFormat::Bmp)
}

/// Splits `data:image/<subtype>;base64,<payload>` into subtype and decoded bytes.
pub fn decode_data_uri(uri: &str) -> (String, Vec<u8>) {
    let rest = uri.strip_prefix("data:image/").expect("Missing data:image/ prefix");
    let (subtype, payload) = rest.split_once(";base64,").expect("Missing ;base64, marker");
    let bytes = general_purpose::STANDARD.decode(payload).expect("Invalid base64 payload");

    (subtype.to_string(), bytes)
}

pub fn expected_ratio(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let ratio = (original as f64 - compressed as f64) / original as f64 * 100.0;
    (ratio * 100.0).round() / 100.0
}
