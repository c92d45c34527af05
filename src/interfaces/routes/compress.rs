use actix_web::web;

use crate::handlers::{compress, resources};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/compress")
            .route(web::post().to(compress::compress_image))
    )
    .service(
        web::resource("/get_resources")
            .route(web::get().to(resources::get_resources))
    );
}
