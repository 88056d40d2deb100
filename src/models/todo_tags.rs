use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A shared, case-insensitive label attachable to any item
///
/// Names are stored in normalized form (trimmed, lowercased) and are unique.
/// Tags are created lazily on first use and never explicitly deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "todo_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::todo_items::Entity> for Entity {
    fn to() -> RelationDef {
        super::todo_item_tags::Relation::TodoItem.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::todo_item_tags::Relation::TodoTag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
