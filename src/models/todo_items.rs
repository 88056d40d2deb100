use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Workflow state of a todo item
///
/// Any value may transition to any other. The only side effect of a
/// transition is the `completed_at` timestamp, which is set when a status
/// change lands on `done` and cleared otherwise.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    #[default]
    #[sea_orm(string_value = "todo")]
    Todo,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "blocked")]
    Blocked,
    #[sea_orm(string_value = "done")]
    Done,
}

/// A single todo entry belonging to exactly one list
///
/// Positions are unique within a list and form a dense sequence 0..N-1,
/// backed by the `uq_todo_items_list_position` constraint.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "todo_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub list_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub status: TodoStatus,
    pub due_date: Option<DateTimeUtc>,
    pub completed_at: Option<DateTimeUtc>,
    pub position: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::todo_lists::Entity",
        from = "Column::ListId",
        to = "super::todo_lists::Column::Id"
    )]
    TodoList,
}

impl Related<super::todo_lists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TodoList.def()
    }
}

impl Related<super::todo_tags::Entity> for Entity {
    fn to() -> RelationDef {
        super::todo_item_tags::Relation::TodoTag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::todo_item_tags::Relation::TodoItem.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
