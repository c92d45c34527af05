use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Quality used when the upload form omits the `quality` field.
pub const DEFAULT_QUALITY: i32 = 85;

/// Path prefix the service is mounted under when embedded in a host app.
pub const APP_MOUNT_PATH: &str = "/image-compression-app";

/// PNG deflate levels selected by the quality knob.
pub const PNG_MAX_COMPRESSION: u8 = 9;
pub const PNG_BALANCED_COMPRESSION: u8 = 6;

/// Qualities below this value select `PNG_MAX_COMPRESSION`.
pub const PNG_QUALITY_THRESHOLD: i32 = 50;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
