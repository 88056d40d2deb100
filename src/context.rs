//! Shared application context
//!
//! Built once in `main` and handed to every request handler. Replaces any
//! form of global state: handlers receive the config and the connection pool
//! explicitly.

use crate::config::AppConfig;
use crate::database::DbConnection;

pub struct AppContext {
    pub config: AppConfig,
    pub db: DbConnection,
}

impl AppContext {
    pub fn new(config: AppConfig, db: DbConnection) -> Self {
        Self { config, db }
    }
}
