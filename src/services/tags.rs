//! Tag normalization and synchronization
//!
//! Tag names are stored and compared in normalized form: trimmed and
//! lowercased. The synchronizer replaces an item's tag set with the resolved
//! tag rows, creating missing tags on demand so no two tags ever share a
//! normalized name.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::error::Error;
use crate::models::{todo_item_tags, todo_items, todo_tags};

/// Canonical form of a tag name
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize a requested tag list, dropping blanks and de-duplicating while
/// preserving first-seen order.
pub fn normalized_names(requested: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();
    for raw in requested {
        if raw.trim().is_empty() {
            continue;
        }
        let name = normalize(raw);
        if seen.insert(name.clone()) {
            normalized.push(name);
        }
    }
    normalized
}

/// Replace an item's tag associations with the requested tag names.
///
/// `None` leaves the existing associations untouched. A provided list that is
/// empty after normalization clears the item's tags. Missing tags are created
/// with their normalized name.
pub async fn synchronize<C>(
    conn: &C,
    item: &todo_items::Model,
    tags: Option<&[String]>,
) -> Result<(), Error>
where
    C: ConnectionTrait,
{
    let Some(requested) = tags else {
        return Ok(());
    };

    let normalized = normalized_names(requested);

    todo_item_tags::Entity::delete_many()
        .filter(todo_item_tags::Column::ItemId.eq(item.id))
        .exec(conn)
        .await?;

    if normalized.is_empty() {
        return Ok(());
    }

    let existing = todo_tags::Entity::find()
        .filter(todo_tags::Column::Name.is_in(normalized.clone()))
        .all(conn)
        .await?;
    let mut by_name: HashMap<String, todo_tags::Model> = existing
        .into_iter()
        .map(|tag| (tag.name.clone(), tag))
        .collect();

    let now = Utc::now();
    for name in &normalized {
        let tag = match by_name.get(name) {
            Some(tag) => tag.clone(),
            None => {
                let tag = todo_tags::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    name: Set(name.clone()),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(conn)
                .await?;
                by_name.insert(name.clone(), tag.clone());
                tag
            }
        };

        todo_item_tags::ActiveModel {
            item_id: Set(item.id),
            tag_id: Set(tag.id),
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}
