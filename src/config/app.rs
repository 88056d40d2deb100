use crate::config::env::env;
use crate::config::{DatabaseConfig, ServerConfig};

/// Top-level application configuration
///
/// Constructed once in `main` and passed down through the application
/// context. Nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Human-readable service name, used in the root banner
    pub app_name: String,
    /// Log filter directive for the tracing subscriber (e.g. "info")
    pub log_level: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Build config from environment variables
    pub fn from_env() -> Self {
        Self {
            app_name: env("APP_NAME", "Launchpad Todo API".to_string()),
            log_level: env("LOG_LEVEL", "info".to_string()),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
        }
    }
}
