use serde::Deserialize;
use validator::Validate;

/// Payload for creating a todo list
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ListCreate {
    #[validate(length(min = 1, max = 120, message = "name must be between 1 and 120 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
}

/// Partial patch for a todo list
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListUpdate {
    #[validate(length(min = 1, max = 120, message = "name must be between 1 and 120 characters"))]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<Option<String>>,
}

/// Query options for fetching a single list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDetailQuery {
    #[serde(default)]
    pub include_items: bool,
}
