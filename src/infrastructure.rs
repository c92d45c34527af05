pub mod imaging;
pub mod server;
