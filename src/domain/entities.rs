pub mod compression;
pub mod encode_plan;
pub mod resources;
pub mod upload;
