//! Shared helpers for integration tests

#![allow(dead_code)]

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use launchpad::migrations::Migrator;
use launchpad::models::{todo_lists, TodoStatus};
use launchpad::requests::{ItemCreate, ListCreate};
use launchpad::services::todos::{self, ItemFilters, ItemWithTags};

/// Fresh in-memory database with the schema applied by the real migrator.
///
/// Capped at one connection so every query sees the same in-memory SQLite
/// instance.
pub async fn test_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1);
    let db = Database::connect(opt)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn create_list(db: &DatabaseConnection, name: &str) -> todo_lists::Model {
    todos::create_list(
        db,
        ListCreate {
            name: name.to_string(),
            description: None,
        },
    )
    .await
    .expect("create list")
}

pub fn item_payload(title: &str) -> ItemCreate {
    ItemCreate {
        title: title.to_string(),
        description: None,
        notes: None,
        due_date: None,
        status: TodoStatus::default(),
        position: None,
        tags: None,
    }
}

pub async fn create_item(db: &DatabaseConnection, list_id: Uuid, title: &str) -> ItemWithTags {
    todos::create_item(db, list_id, item_payload(title))
        .await
        .expect("create item")
}

/// Titles and positions of a list's items in display order
pub async fn ordered(db: &DatabaseConnection, list_id: Uuid) -> Vec<(String, i32)> {
    todos::list_items(db, list_id, ItemFilters::default())
        .await
        .expect("list items")
        .into_iter()
        .map(|entry| (entry.item.title.clone(), entry.item.position))
        .collect()
}

/// Assert that positions form exactly 0..N-1 in display order
pub fn assert_dense(entries: &[(String, i32)]) {
    let positions: Vec<i32> = entries.iter().map(|(_, position)| *position).collect();
    let expected: Vec<i32> = (0..entries.len() as i32).collect();
    assert_eq!(positions, expected, "positions must be dense and zero-based");
}
