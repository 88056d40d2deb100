//! Position sequencing for items within a list
//!
//! Positions of a list's items always form the dense sequence 0..N-1, ordered
//! by (position, created_at). Every reordering write happens in two passes:
//! rows first move to positions offset by a large constant, then to their
//! final values. The offset keeps the unique (list_id, position) constraint
//! satisfied while rows swap slots inside one transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::error::Error;
use crate::models::todo_items;

const PLACEHOLDER_BASE: i32 = 1000;

/// Splice an item into its list at the desired position and reassign
/// positions 0..N-1.
///
/// A missing or out-of-range desired position appends the item at the end;
/// negative values clamp to the head.
pub async fn resequence_item<C>(
    conn: &C,
    item: &todo_items::Model,
    desired_position: Option<i32>,
) -> Result<(), Error>
where
    C: ConnectionTrait,
{
    let items = list_in_order(conn, item.list_id).await?;

    let target = items
        .iter()
        .find(|existing| existing.id == item.id)
        .cloned()
        .unwrap_or_else(|| item.clone());
    let mut ordered: Vec<todo_items::Model> = items
        .into_iter()
        .filter(|existing| existing.id != item.id)
        .collect();

    match desired_position {
        Some(position) if position < ordered.len() as i32 + 1 => {
            let insert_at = position.max(0) as usize;
            ordered.insert(insert_at, target);
        }
        _ => ordered.push(target),
    }

    apply_ordered_positions(conn, &ordered).await
}

/// Reassign positions 0..N-1 to all items of a list in their current order.
///
/// Used after a deletion to close the gap left behind.
pub async fn resequence_all<C>(conn: &C, list_id: Uuid) -> Result<(), Error>
where
    C: ConnectionTrait,
{
    let items = list_in_order(conn, list_id).await?;
    apply_ordered_positions(conn, &items).await
}

async fn list_in_order<C>(conn: &C, list_id: Uuid) -> Result<Vec<todo_items::Model>, Error>
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

async fn apply_ordered_positions<C>(conn: &C, items: &[todo_items::Model]) -> Result<(), Error>
where
    C: ConnectionTrait,
{
    if items.is_empty() {
        return Ok(());
    }

    let now = Utc::now();
    // Tracks each row's position across both passes; only rows whose value
    // actually changes are written.
    let mut positions: Vec<i32> = items.iter().map(|item| item.position).collect();

    for (index, current) in items.iter().enumerate() {
        let placeholder = PLACEHOLDER_BASE + index as i32;
        if positions[index] != placeholder {
            write_position(conn, current, placeholder, now).await?;
            positions[index] = placeholder;
        }
    }

    for (index, current) in items.iter().enumerate() {
        let target = index as i32;
        if positions[index] != target {
            write_position(conn, current, target, now).await?;
        }
    }

    Ok(())
}

async fn write_position<C>(
    conn: &C,
    item: &todo_items::Model,
    position: i32,
    now: DateTime<Utc>,
) -> Result<(), Error>
where
    C: ConnectionTrait,
{
    let mut active: todo_items::ActiveModel = item.clone().into();
    active.position = Set(position);
    active.updated_at = Set(now);
    active.update(conn).await?;
    Ok(())
}
