use serde::Serialize;

/// Asset paths a host application needs to mount the compression UI.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub html: &'static str,
    pub css: &'static str,
    pub js: &'static str,
}

pub const IMAGE_COMPRESSION_RESOURCES: ResourceDescriptor = ResourceDescriptor {
    html: "/api/image-compression-app/index",
    css: "/static/image-compression-app/css/style.css",
    js: "/static/image-compression-app/js/app.js",
};
