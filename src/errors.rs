use actix_multipart::MultipartError;
use actix_web::{
    error::{BlockingError, ResponseError},
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use validator::ValidationErrors;

pub const NO_IMAGE_UPLOADED: &str = "No image uploaded";

#[derive(Debug, Display, PartialEq)]
pub enum AppError {
    /// Missing upload or missing filename.
    #[display("{_0}")]
    ValidationError(String),

    /// Any decode or encode failure, message passed through as-is.
    #[display("{_0}")]
    ProcessingError(String),

    #[display("{_0}")]
    PayloadTooLarge(String),

    #[display("{_0}")]
    BadRequest(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({"error": self.to_string()}))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ProcessingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| NO_IMAGE_UPLOADED.to_string());

        AppError::ValidationError(message)
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ProcessingError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ProcessingError(err.to_string())
    }
}

impl From<BlockingError> for AppError {
    fn from(err: BlockingError) -> Self {
        AppError::ProcessingError(err.to_string())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        match &err {
            MultipartError::ContentTypeMissing
            | MultipartError::ContentTypeParse
            | MultipartError::ContentTypeIncompatible
            | MultipartError::BoundaryMissing => {
                AppError::ValidationError(NO_IMAGE_UPLOADED.to_string())
            }
            MultipartError::Payload(e) => AppError::PayloadTooLarge(e.to_string()),
            _ => AppError::BadRequest(err.to_string()),
        }
    }
}
