use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::models::TodoStatus;

/// Payload for creating a todo item
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ItemCreate {
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    pub title: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: TodoStatus,
    /// Desired position within the list; appended at the end when absent
    pub position: Option<i32>,
    /// Tag names to attach; normalized and created on demand
    pub tags: Option<Vec<String>>,
}

/// Partial patch for a todo item
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ItemUpdate {
    #[validate(length(min = 1, max = 200, message = "title must be between 1 and 200 characters"))]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub notes: Option<Option<String>>,
    #[serde(default)]
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub status: Option<TodoStatus>,
    pub position: Option<i32>,
    /// `None` leaves tags untouched; an empty list clears them
    pub tags: Option<Vec<String>>,
}

/// Query filters for listing items
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemFilterQuery {
    pub status: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}
