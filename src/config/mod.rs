//! Runtime configuration
//!
//! Config structs are built from environment variables once at process start
//! and passed down explicitly. There is no cached global settings object.

mod app;
mod database;
mod env;
mod server;

pub use app::AppConfig;
pub use database::DatabaseConfig;
pub use env::env;
pub use server::ServerConfig;
