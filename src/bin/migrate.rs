//! Migration runner binary
//!
//! Usage:
//!   cargo run --bin migrate           - Run all pending migrations
//!   cargo run --bin migrate rollback  - Rollback the last migration
//!   cargo run --bin migrate status    - Show migration status
//!   cargo run --bin migrate fresh     - Drop all tables and re-run migrations

use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;

use launchpad::config::env;
use launchpad::database::prepare_url;
use launchpad::migrations::Migrator;

#[derive(Parser)]
#[command(name = "migrate", about = "Database migration runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run all pending migrations
    Up,
    /// Rollback the most recent migrations
    Rollback {
        /// Number of migrations to roll back
        #[arg(default_value_t = 1)]
        steps: u32,
    },
    /// Show migration status
    Status,
    /// Drop all tables and re-run migrations
    Fresh,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url: String = env("DATABASE_URL", "sqlite://./launchpad.db".to_string());
    let database_url = prepare_url(&database_url);

    let db = sea_orm::Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    match cli.command.unwrap_or(Command::Up) {
        Command::Up => {
            println!("Running migrations...");
            Migrator::up(&db, None)
                .await
                .expect("Failed to run migrations");
            println!("Migrations completed successfully!");
        }
        Command::Rollback { steps } => {
            println!("Rolling back {} migration(s)...", steps);
            Migrator::down(&db, Some(steps))
                .await
                .expect("Failed to rollback");
            println!("Rollback completed successfully!");
        }
        Command::Status => {
            println!("Migration status:");
            Migrator::status(&db).await.expect("Failed to get status");
        }
        Command::Fresh => {
            println!("WARNING: Dropping all tables and re-running migrations...");
            Migrator::fresh(&db)
                .await
                .expect("Failed to refresh database");
            println!("Database refreshed successfully!");
        }
    }
}
