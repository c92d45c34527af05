use actix_web::{get, HttpResponse, Responder};

use crate::constants::APP_MOUNT_PATH;

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Image compression service",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "compress": "POST /compress",
            "resources": "GET /get_resources",
            "health": "GET /health",
            "embedded_prefix": APP_MOUNT_PATH
        }
    }))
}
