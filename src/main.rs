use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use launchpad::config::AppConfig;
use launchpad::database::DbConnection;
use launchpad::{routes, AppContext, Server};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db = DbConnection::connect(&config.database)
        .await
        .expect("Failed to connect to database");

    let server_config = config.server.clone();
    let ctx = Arc::new(AppContext::new(config, db));
    let router = routes::build(ctx);

    Server::new(router, &server_config)
        .run()
        .await
        .expect("Failed to start server");
}
