use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use super::upload::SourceFormat;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompressionResult {
    pub original_size: usize,
    pub compressed_size: usize,
    pub compression_ratio: f64,
    pub compressed_data: String,
}

impl CompressionResult {
    pub fn new(original_size: usize, format: SourceFormat, encoded: &[u8]) -> Self {
        let compressed_size = encoded.len();

        CompressionResult {
            original_size,
            compressed_size,
            compression_ratio: compression_ratio(original_size, compressed_size),
            compressed_data: encode_data_uri(&format.data_uri_subtype(), encoded),
        }
    }
}

/// Percentage saved, rounded to two decimals. Zero for an empty original.
pub fn compression_ratio(original_size: usize, compressed_size: usize) -> f64 {
    if original_size == 0 {
        return 0.0;
    }

    let ratio = (original_size as f64 - compressed_size as f64) / original_size as f64 * 100.0;
    (ratio * 100.0).round() / 100.0
}

/// Builds `data:image/<subtype>;base64,<payload>`.
pub fn encode_data_uri(subtype: &str, bytes: &[u8]) -> String {
    format!(
        "data:image/{};base64,{}",
        subtype,
        general_purpose::STANDARD.encode(bytes)
    )
}
