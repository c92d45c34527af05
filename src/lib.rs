mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{codecs, handlers, routes};
pub use infrastructure::{imaging, server};

use codecs::image_codec::ImageCodec;
use use_cases::compression::CompressionHandler;

pub struct AppState {
    pub compression_handler: AppCompressionHandler,
}

pub type AppCompressionHandler = CompressionHandler<ImageCodec>;

impl AppState {
    pub fn new() -> Self {
        AppState {
            compression_handler: CompressionHandler::new(ImageCodec::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
