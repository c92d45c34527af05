use crate::entities::resources::{ResourceDescriptor, IMAGE_COMPRESSION_RESOURCES};

/// Static asset paths for embedding the compression UI in a host app.
pub fn describe_resources() -> ResourceDescriptor {
    IMAGE_COMPRESSION_RESOURCES
}
