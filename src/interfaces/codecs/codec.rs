use crate::{
    entities::{encode_plan::EncodePlan, upload::DecodedImage},
    errors::AppError,
};

pub trait Codec: Send + Sync {
    /// Sniffs the container format and decodes the pixels.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, AppError>;

    /// Encodes the image according to `plan`, returning the encoded bytes.
    fn encode(&self, image: &DecodedImage, plan: &EncodePlan) -> Result<Vec<u8>, AppError>;
}
