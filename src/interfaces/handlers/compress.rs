use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse, Responder};
use tracing::{instrument, warn};

use crate::{entities::upload::CompressUpload, errors::AppError, AppState};

#[instrument(skip(state, form))]
pub async fn compress_image(
    state: web::Data<AppState>,
    form: MultipartForm<CompressUpload>,
) -> Result<impl Responder, AppError> {
    let request = form.into_inner().into_request().inspect_err(|e| {
        warn!("Rejected upload: {}", e);
    })?;

    // Decoding and encoding are CPU-bound; keep them off the async workers.
    let result = web::block(move || state.compression_handler.compress(request))
        .await?
        .inspect_err(|e| warn!("Compression failed: {}", e))?;

    Ok(HttpResponse::Ok().json(result))
}
