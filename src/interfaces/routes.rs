use actix_web::web;

use crate::{
    constants::APP_MOUNT_PATH,
    handlers::{home::home, system::health_check},
    settings::AppConfig,
};

mod compress;
mod multipart;

/// Mounts the compression routes both at the root and under the embedding prefix.
pub fn configure_routes(cfg: &mut web::ServiceConfig, config: &AppConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.configure(compress::config_routes);
    cfg.service(
        web::scope(APP_MOUNT_PATH)
            .configure(compress::config_routes)
    );

    multipart::config_routes(cfg, config.max_upload_bytes);
}
