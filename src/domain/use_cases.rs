pub mod compression;
pub mod resources;
