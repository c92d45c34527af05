pub mod codecs;
pub mod handlers;
pub mod routes;
