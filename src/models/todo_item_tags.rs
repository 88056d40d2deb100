use sea_orm::entity::prelude::*;

/// Join table linking items to tags
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todo_item_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::todo_items::Entity",
        from = "Column::ItemId",
        to = "super::todo_items::Column::Id"
    )]
    TodoItem,
    #[sea_orm(
        belongs_to = "super::todo_tags::Entity",
        from = "Column::TagId",
        to = "super::todo_tags::Column::Id"
    )]
    TodoTag,
}

impl ActiveModelBehavior for ActiveModel {}
