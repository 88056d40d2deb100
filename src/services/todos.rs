//! Todo list and item orchestration
//!
//! Every mutating operation opens a transaction, runs its sub-steps (field
//! patches, position sequencing, tag synchronization) and commits as a unit,
//! so a failure mid-way leaves no partial position or tag state. Reads use
//! explicit batched queries to attach tags instead of per-row lazy loads.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::Error;
use crate::models::{todo_item_tags, todo_items, todo_lists, todo_tags, TodoStatus};
use crate::requests::{ItemCreate, ItemUpdate, ListCreate, ListUpdate};
use crate::services::{ordering, tags};

/// Tag as exposed through the API
#[derive(Debug, Clone, Serialize)]
pub struct TagRead {
    pub id: Uuid,
    pub name: String,
}

impl From<todo_tags::Model> for TagRead {
    fn from(tag: todo_tags::Model) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

/// An item together with its resolved tags
#[derive(Debug, Serialize)]
pub struct ItemWithTags {
    #[serde(flatten)]
    pub item: todo_items::Model,
    pub tags: Vec<TagRead>,
}

/// A list annotated with its current item count
#[derive(Debug, Serialize)]
pub struct ListSummary {
    #[serde(flatten)]
    pub list: todo_lists::Model,
    pub item_count: i64,
}

/// A list with its items in display order
#[derive(Debug, Serialize)]
pub struct ListDetail {
    #[serde(flatten)]
    pub list: todo_lists::Model,
    pub items: Vec<ItemWithTags>,
}

/// Conjunctive filters for listing items
#[derive(Debug, Clone, Default)]
pub struct ItemFilters {
    pub status: Option<TodoStatus>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

/// All lists ordered by creation time, each with its item count
pub async fn list_lists(db: &DatabaseConnection) -> Result<Vec<ListSummary>, Error> {
    let lists = todo_lists::Entity::find()
        .order_by_asc(todo_lists::Column::CreatedAt)
        .all(db)
        .await?;

    let counts: Vec<(Uuid, i64)> = todo_items::Entity::find()
        .select_only()
        .column(todo_items::Column::ListId)
        .column_as(todo_items::Column::Id.count(), "item_count")
        .group_by(todo_items::Column::ListId)
        .into_tuple()
        .all(db)
        .await?;
    let counts: HashMap<Uuid, i64> = counts.into_iter().collect();

    Ok(lists
        .into_iter()
        .map(|list| {
            let item_count = counts.get(&list.id).copied().unwrap_or(0);
            ListSummary { list, item_count }
        })
        .collect())
}

pub async fn create_list(
    db: &DatabaseConnection,
    payload: ListCreate,
) -> Result<todo_lists::Model, Error> {
    let now = Utc::now();
    let list = todo_lists::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        description: Set(payload.description),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await?;
    Ok(list)
}

pub async fn get_list(db: &DatabaseConnection, list_id: Uuid) -> Result<todo_lists::Model, Error> {
    require_list(db, list_id).await
}

/// A list with its items ordered by (position, created_at), tags attached
pub async fn get_list_detail(db: &DatabaseConnection, list_id: Uuid) -> Result<ListDetail, Error> {
    let list = require_list(db, list_id).await?;
    let items = items_in_order(db, list.id).await?;
    let items = attach_tags(db, items).await?;
    Ok(ListDetail { list, items })
}

pub async fn update_list(
    db: &DatabaseConnection,
    list_id: Uuid,
    patch: ListUpdate,
) -> Result<todo_lists::Model, Error> {
    let list = require_list(db, list_id).await?;

    let mut active: todo_lists::ActiveModel = list.clone().into();
    let mut changed = false;
    if let Some(name) = patch.name {
        active.name = Set(name);
        changed = true;
    }
    if let Some(description) = patch.description {
        active.description = Set(description);
        changed = true;
    }

    if !changed {
        return Ok(list);
    }

    active.updated_at = Set(Utc::now());
    Ok(active.update(db).await?)
}

/// Delete a list, cascading to its items and their tag associations
pub async fn delete_list(db: &DatabaseConnection, list_id: Uuid) -> Result<(), Error> {
    let txn = db.begin().await?;
    let list = require_list(&txn, list_id).await?;

    let item_ids: Vec<Uuid> = todo_items::Entity::find()
        .filter(todo_items::Column::ListId.eq(list.id))
        .all(&txn)
        .await?
        .into_iter()
        .map(|item| item.id)
        .collect();

    if !item_ids.is_empty() {
        todo_item_tags::Entity::delete_many()
            .filter(todo_item_tags::Column::ItemId.is_in(item_ids))
            .exec(&txn)
            .await?;
        todo_items::Entity::delete_many()
            .filter(todo_items::Column::ListId.eq(list.id))
            .exec(&txn)
            .await?;
    }

    todo_lists::Entity::delete_by_id(list.id).exec(&txn).await?;
    txn.commit().await?;
    Ok(())
}

/// Items of a list in display order, narrowed by the given filters
pub async fn list_items(
    db: &DatabaseConnection,
    list_id: Uuid,
    filters: ItemFilters,
) -> Result<Vec<ItemWithTags>, Error> {
    require_list(db, list_id).await?;

    let mut query = todo_items::Entity::find()
        .filter(todo_items::Column::ListId.eq(list_id))
        .order_by_asc(todo_items::Column::Position)
        .order_by_asc(todo_items::Column::CreatedAt);

    if let Some(status) = filters.status {
        query = query.filter(todo_items::Column::Status.eq(status));
    }

    if let Some(tag) = &filters.tag {
        // Stored names are normalized, so a lowercased comparison is exact
        let normalized = tag.to_lowercase();
        let tag_row = todo_tags::Entity::find()
            .filter(todo_tags::Column::Name.eq(normalized))
            .one(db)
            .await?;
        let Some(tag_row) = tag_row else {
            return Ok(Vec::new());
        };

        let item_ids: Vec<Uuid> = todo_item_tags::Entity::find()
            .filter(todo_item_tags::Column::TagId.eq(tag_row.id))
            .all(db)
            .await?
            .into_iter()
            .map(|link| link.item_id)
            .collect();
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }
        query = query.filter(todo_items::Column::Id.is_in(item_ids));
    }

    if let Some(search) = &filters.search {
        if !search.is_empty() {
            let pattern = format!("%{}%", search.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(todo_items::Column::Title)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(todo_items::Column::Description)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(todo_items::Column::Notes)))
                            .like(pattern),
                    ),
            );
        }
    }

    let items = query.all(db).await?;
    attach_tags(db, items).await
}

/// Create an item in a list, sequencing its position and syncing its tags
pub async fn create_item(
    db: &DatabaseConnection,
    list_id: Uuid,
    payload: ItemCreate,
) -> Result<ItemWithTags, Error> {
    let txn = db.begin().await?;
    let list = require_list(&txn, list_id).await?;

    let now = Utc::now();
    let count = todo_items::Entity::find()
        .filter(todo_items::Column::ListId.eq(list.id))
        .count(&txn)
        .await?;

    let item = todo_items::ActiveModel {
        id: Set(Uuid::new_v4()),
        list_id: Set(list.id),
        title: Set(payload.title),
        description: Set(payload.description),
        notes: Set(payload.notes),
        status: Set(payload.status),
        due_date: Set(payload.due_date),
        completed_at: Set(completion_timestamp(payload.status, now)),
        position: Set(count as i32),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    ordering::resequence_item(&txn, &item, payload.position).await?;
    tags::synchronize(&txn, &item, payload.tags.as_deref()).await?;

    txn.commit().await?;
    get_item(db, item.id).await
}

pub async fn get_item(db: &DatabaseConnection, item_id: Uuid) -> Result<ItemWithTags, Error> {
    let item = require_item(db, item_id).await?;
    let mut tag_map = load_tags_for(db, &[item.id]).await?;
    let tags = tag_map.remove(&item.id).unwrap_or_default();
    Ok(ItemWithTags { item, tags })
}

/// Apply a partial patch to an item
///
/// Field patches land first. A patched status recomputes `completed_at`,
/// a patched position resequences the list, and patched tags resynchronize
/// the tag set. Everything commits together.
pub async fn update_item(
    db: &DatabaseConnection,
    item_id: Uuid,
    patch: ItemUpdate,
) -> Result<ItemWithTags, Error> {
    let txn = db.begin().await?;
    let item = require_item(&txn, item_id).await?;

    let now = Utc::now();
    let mut active: todo_items::ActiveModel = item.clone().into();
    let mut changed = false;

    if let Some(title) = patch.title {
        active.title = Set(title);
        changed = true;
    }
    if let Some(description) = patch.description {
        active.description = Set(description);
        changed = true;
    }
    if let Some(notes) = patch.notes {
        active.notes = Set(notes);
        changed = true;
    }
    if let Some(due_date) = patch.due_date {
        active.due_date = Set(due_date);
        changed = true;
    }
    if let Some(status) = patch.status {
        active.status = Set(status);
        active.completed_at = Set(completion_timestamp(status, now));
        changed = true;
    }

    let item = if changed {
        active.updated_at = Set(now);
        active.update(&txn).await?
    } else {
        item
    };

    if patch.position.is_some() {
        ordering::resequence_item(&txn, &item, patch.position).await?;
    }

    tags::synchronize(&txn, &item, patch.tags.as_deref()).await?;

    txn.commit().await?;
    get_item(db, item_id).await
}

/// Delete an item and close the position gap in its list
pub async fn delete_item(db: &DatabaseConnection, item_id: Uuid) -> Result<(), Error> {
    let txn = db.begin().await?;
    let item = require_item(&txn, item_id).await?;
    let list_id = item.list_id;

    todo_item_tags::Entity::delete_many()
        .filter(todo_item_tags::Column::ItemId.eq(item.id))
        .exec(&txn)
        .await?;
    todo_items::Entity::delete_by_id(item.id).exec(&txn).await?;

    ordering::resequence_all(&txn, list_id).await?;

    txn.commit().await?;
    Ok(())
}

fn completion_timestamp(status: TodoStatus, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if status == TodoStatus::Done {
        Some(now)
    } else {
        None
    }
}

async fn require_list<C>(conn: &C, list_id: Uuid) -> Result<todo_lists::Model, Error>
where
    C: ConnectionTrait,
{
    todo_lists::Entity::find_by_id(list_id)
        .one(conn)
        .await?
        .ok_or(Error::ListNotFound { id: list_id })
}

async fn require_item<C>(conn: &C, item_id: Uuid) -> Result<todo_items::Model, Error>
where
    C: ConnectionTrait,
{
    todo_items::Entity::find_by_id(item_id)
        .one(conn)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })
}

async fn items_in_order<C>(conn: &C, list_id: Uuid) -> Result<Vec<todo_items::Model>, Error>
where
    C: ConnectionTrait,
{
    Ok(todo_items::Entity::find()
        .filter(todo_items::Column::ListId.eq(list_id))
        .order_by_asc(todo_items::Column::Position)
        .order_by_asc(todo_items::Column::CreatedAt)
        .all(conn)
        .await?)
}

async fn attach_tags<C>(
    conn: &C,
    items: Vec<todo_items::Model>,
) -> Result<Vec<ItemWithTags>, Error>
where
    C: ConnectionTrait,
{
    let item_ids: Vec<Uuid> = items.iter().map(|item| item.id).collect();
    let mut tag_map = load_tags_for(conn, &item_ids).await?;
    Ok(items
        .into_iter()
        .map(|item| {
            let tags = tag_map.remove(&item.id).unwrap_or_default();
            ItemWithTags { item, tags }
        })
        .collect())
}

/// Batched tag load for a set of items: one query for the join rows, one for
/// the tags, assembled in memory.
async fn load_tags_for<C>(
    conn: &C,
    item_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<TagRead>>, Error>
where
    C: ConnectionTrait,
{
    if item_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let links = todo_item_tags::Entity::find()
        .filter(todo_item_tags::Column::ItemId.is_in(item_ids.iter().copied()))
        .all(conn)
        .await?;
    if links.is_empty() {
        return Ok(HashMap::new());
    }

    let tag_ids: Vec<Uuid> = links.iter().map(|link| link.tag_id).collect();
    let by_id: HashMap<Uuid, todo_tags::Model> = todo_tags::Entity::find()
        .filter(todo_tags::Column::Id.is_in(tag_ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|tag| (tag.id, tag))
        .collect();

    let mut map: HashMap<Uuid, Vec<TagRead>> = HashMap::new();
    for link in links {
        if let Some(tag) = by_id.get(&link.tag_id) {
            map.entry(link.item_id)
                .or_default()
                .push(TagRead::from(tag.clone()));
        }
    }
    for tags in map.values_mut() {
        tags.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Ok(map)
}
