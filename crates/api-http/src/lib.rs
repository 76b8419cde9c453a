// Job Jar HTTP Adapter - Voice platform webhook

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use handler::AppState;
pub use server::{HttpServer, HttpServerConfig, ServerHandle};
