//! SeaORM schema migrations
//!
//! Run with the `migrate` binary: `cargo run --bin migrate [up|rollback|status|fresh]`.

use sea_orm_migration::prelude::*;

mod m20250101_000001_create_todo_schema;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_todo_schema::Migration)]
    }
}
