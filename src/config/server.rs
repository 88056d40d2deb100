use crate::config::env::env;

/// Listen address for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build config from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env("SERVER_HOST", "127.0.0.1".to_string()),
            port: env("SERVER_PORT", 8000),
        }
    }
}
