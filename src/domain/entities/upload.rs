use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use image::{DynamicImage, ImageFormat};
use validator::Validate;

use crate::{
    constants::DEFAULT_QUALITY,
    errors::{AppError, NO_IMAGE_UPLOADED},
};

/// Field checked first wins when several are missing.
const PRESENCE_ORDER: [&str; 2] = ["file_name", "data"];

/// A single uploaded image as received from the form.
#[derive(Debug, Validate)]
pub struct ImageUploadRequest {
    #[validate(length(min = 1, message = "No image uploaded"))]
    pub data: Vec<u8>,

    #[validate(length(min = 1, message = "No image selected"))]
    pub file_name: String,

    /// Passed to the encoder unclamped.
    pub quality: i32,
}

impl ImageUploadRequest {
    pub fn new(data: Vec<u8>, file_name: impl Into<String>) -> Self {
        ImageUploadRequest {
            data,
            file_name: file_name.into(),
            quality: DEFAULT_QUALITY,
        }
    }

    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = quality;
        self
    }

    pub fn original_size(&self) -> usize {
        self.data.len()
    }

    /// Rejects an empty filename first, then an empty body.
    pub fn check_presence(&self) -> Result<(), AppError> {
        self.validate().map_err(|errors| {
            let fields = errors.field_errors();
            let message = PRESENCE_ORDER
                .iter()
                .filter_map(|name| fields.get(*name))
                .flat_map(|errs| errs.iter())
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| NO_IMAGE_UPLOADED.to_string());

            AppError::ValidationError(message)
        })
    }
}

/// Container format detected from the upload's magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
    WebP,
    Other(ImageFormat),
    Unknown,
}

impl SourceFormat {
    /// Subtype used in the `data:image/<subtype>` prefix of the response.
    pub fn data_uri_subtype(&self) -> String {
        match self {
            SourceFormat::Jpeg | SourceFormat::Unknown => "jpeg".to_string(),
            SourceFormat::Png => "png".to_string(),
            SourceFormat::WebP => "webp".to_string(),
            SourceFormat::Other(format) => format
                .to_mime_type()
                .strip_prefix("image/")
                .or_else(|| format.extensions_str().first().copied())
                .unwrap_or("octet-stream")
                .to_string(),
        }
    }
}

impl From<Option<ImageFormat>> for SourceFormat {
    fn from(format: Option<ImageFormat>) -> Self {
        match format {
            Some(ImageFormat::Jpeg) => SourceFormat::Jpeg,
            Some(ImageFormat::Png) => SourceFormat::Png,
            Some(ImageFormat::WebP) => SourceFormat::WebP,
            Some(other) => SourceFormat::Other(other),
            None => SourceFormat::Unknown,
        }
    }
}

#[derive(Debug)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: SourceFormat,
}

impl DecodedImage {
    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }
}

/// Multipart body of `POST /compress`.
#[derive(Debug, MultipartForm)]
pub struct CompressUpload {
    pub image: Option<Bytes>,
    pub quality: Option<Text<String>>,
}

impl CompressUpload {
    /// Checks the upload before the quality field, so a missing image wins over a bad quality.
    ///
    /// A part without a `filename` attribute is not a file upload.
    pub fn into_request(self) -> Result<ImageUploadRequest, AppError> {
        let Some(file) = self.image else {
            return Err(AppError::ValidationError(NO_IMAGE_UPLOADED.to_string()));
        };
        let Some(file_name) = file.file_name else {
            return Err(AppError::ValidationError(NO_IMAGE_UPLOADED.to_string()));
        };

        let request = ImageUploadRequest::new(file.data.to_vec(), file_name);
        request.check_presence()?;

        let quality = match self.quality {
            Some(raw) => parse_quality(&raw.into_inner())?,
            None => DEFAULT_QUALITY,
        };

        Ok(request.with_quality(quality))
    }
}

fn parse_quality(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::ValidationError(format!("Invalid quality value: {}", raw)))
}
