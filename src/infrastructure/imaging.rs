pub mod jpeg;
pub mod native;
pub mod png;
pub mod webp;
