//! SeaORM entities
//!
//! Four tables: lists own items, items carry a dense position within their
//! list, and tags form a shared vocabulary attached through a join table.

pub mod todo_item_tags;
pub mod todo_items;
pub mod todo_lists;
pub mod todo_tags;

pub use todo_items::TodoStatus;
