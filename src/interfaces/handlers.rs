pub mod compress;
pub mod home;
pub mod resources;
pub mod system;
