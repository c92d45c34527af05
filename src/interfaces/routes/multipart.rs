use actix_multipart::form::MultipartFormConfig;
use actix_web::web;

use crate::errors::AppError;

/// Upload limits and error mapping for every `MultipartForm` extractor.
pub fn config_routes(cfg: &mut web::ServiceConfig, upload_limit: usize) {
    cfg.app_data(
        MultipartFormConfig::default()
            .total_limit(upload_limit)
            .memory_limit(upload_limit)
            .error_handler(|err, _req| AppError::from(err).into())
    );
}
