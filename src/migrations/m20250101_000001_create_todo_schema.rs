use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TodoLists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TodoLists::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TodoLists::Name).string_len(120).not_null())
                    .col(ColumnDef::new(TodoLists::Description).string_len(500))
                    .col(
                        ColumnDef::new(TodoLists::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TodoLists::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TodoTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TodoTags::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(TodoTags::Name)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TodoTags::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TodoTags::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TodoItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TodoItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TodoItems::ListId).uuid().not_null())
                    .col(ColumnDef::new(TodoItems::Title).string_len(200).not_null())
                    .col(ColumnDef::new(TodoItems::Description).text())
                    .col(ColumnDef::new(TodoItems::Notes).text())
                    .col(
                        ColumnDef::new(TodoItems::Status)
                            .string_len(20)
                            .not_null()
                            .default("todo"),
                    )
                    .col(ColumnDef::new(TodoItems::DueDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(TodoItems::CompletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(TodoItems::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TodoItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TodoItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_todo_items_list_id")
                            .from(TodoItems::Table, TodoItems::ListId)
                            .to(TodoLists::Table, TodoLists::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_todo_items_list_id")
                    .table(TodoItems::Table)
                    .col(TodoItems::ListId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_todo_items_list_position")
                    .table(TodoItems::Table)
                    .col(TodoItems::ListId)
                    .col(TodoItems::Position)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TodoItemTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TodoItemTags::ItemId).uuid().not_null())
                    .col(ColumnDef::new(TodoItemTags::TagId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(TodoItemTags::ItemId)
                            .col(TodoItemTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_todo_item_tags_item_id")
                            .from(TodoItemTags::Table, TodoItemTags::ItemId)
                            .to(TodoItems::Table, TodoItems::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_todo_item_tags_tag_id")
                            .from(TodoItemTags::Table, TodoItemTags::TagId)
                            .to(TodoTags::Table, TodoTags::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TodoItemTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TodoItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TodoTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TodoLists::Table).to_owned())
            .await
    }
}

/// Table and column identifiers for todo_lists
#[derive(DeriveIden)]
enum TodoLists {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

/// Table and column identifiers for todo_tags
#[derive(DeriveIden)]
enum TodoTags {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

/// Table and column identifiers for todo_items
#[derive(DeriveIden)]
enum TodoItems {
    Table,
    Id,
    ListId,
    Title,
    Description,
    Notes,
    Status,
    DueDate,
    CompletedAt,
    Position,
    CreatedAt,
    UpdatedAt,
}

/// Table and column identifiers for todo_item_tags
#[derive(DeriveIden)]
enum TodoItemTags {
    Table,
    ItemId,
    TagId,
}
