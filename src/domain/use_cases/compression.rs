use tracing::{debug, info};

use crate::{
    codecs::codec::Codec,
    entities::{
        compression::CompressionResult,
        encode_plan::EncodePlan,
        upload::ImageUploadRequest,
    },
    errors::AppError,
};

pub struct CompressionHandler<C>
where
    C: Codec,
{
    pub codec: C,
}

impl<C> CompressionHandler<C>
where
    C: Codec,
{
    pub fn new(codec: C) -> Self {
        CompressionHandler { codec }
    }

    /// Re-encodes an uploaded image with format-specific settings and reports the size change.
    ///
    /// Runs synchronously; callers on an async runtime should move it to a blocking thread.
    pub fn compress(&self, request: ImageUploadRequest) -> Result<CompressionResult, AppError> {
        request.check_presence()?;

        let original_size = request.original_size();
        let decoded = self.codec.decode(&request.data)?;

        let plan = EncodePlan::select(decoded.format, request.quality);
        debug!(
            file_name = %request.file_name,
            format = ?decoded.format,
            has_alpha = decoded.has_alpha(),
            ?plan,
            "Selected encode plan"
        );

        let encoded = self.codec.encode(&decoded, &plan)?;
        let result = CompressionResult::new(original_size, decoded.format, &encoded);

        info!(
            file_name = %request.file_name,
            original_size = result.original_size,
            compressed_size = result.compressed_size,
            compression_ratio = result.compression_ratio,
            "Image compressed"
        );

        Ok(result)
    }
}
