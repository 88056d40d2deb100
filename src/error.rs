//! Service-wide error types
//!
//! Provides a unified error type that converts to appropriate HTTP responses,
//! so handlers can propagate failures with the `?` operator.

use std::collections::HashMap;

use thiserror::Error;
use uuid::Uuid;

/// Validation errors keyed by field name
///
/// Supports multiple messages per field. Serialized as:
///
/// ```json
/// {
///     "message": "The given data was invalid.",
///     "errors": {
///         "name": ["name must be between 1 and 120 characters"]
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Map of field names to their validation error messages
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Add an error for a specific field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert from the validator crate's error collection
    pub fn from_validator(errors: validator::ValidationErrors) -> Self {
        let mut collected = Self::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("Validation failed for field '{}'", field),
                };
                collected.add(field.to_string(), message);
            }
        }
        collected
    }

    /// Convert to a JSON value for the response body
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "message": "The given data was invalid.",
            "errors": self.errors
        })
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation failed: {:?}", self.errors)
    }
}

impl std::error::Error for ValidationErrors {}

/// Service-wide error type
///
/// Domain errors (`ListNotFound`, `ItemNotFound`) and boundary errors share
/// one enum so every layer can return `Result<T, Error>` and let the HTTP
/// layer pick the status code.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Requested todo list does not exist (404 Not Found)
    #[error("Todo list {id} not found")]
    ListNotFound {
        /// Identifier that failed to resolve
        id: Uuid,
    },

    /// Requested todo item does not exist (404 Not Found)
    #[error("Todo item {id} not found")]
    ItemNotFound {
        /// Identifier that failed to resolve
        id: Uuid,
    },

    /// Route parameter missing from the matched path (400 Bad Request)
    #[error("Missing required parameter: {param_name}")]
    ParamError { param_name: String },

    /// Route parameter could not be parsed to the expected type (400 Bad Request)
    #[error("Invalid parameter '{param}': expected {expected_type}")]
    ParamParse {
        param: String,
        expected_type: &'static str,
    },

    /// Request body could not be read or decoded (400 Bad Request)
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// Payload validation errors (422 Unprocessable Entity)
    #[error("Validation failed")]
    Validation(ValidationErrors),

    /// Database error (500 Internal Server Error)
    #[error("Database error: {0}")]
    Database(String),

    /// Generic internal server error
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl Error {
    pub fn param(name: impl Into<String>) -> Self {
        Self::ParamError {
            param_name: name.into(),
        }
    }

    pub fn param_parse(param: impl Into<String>, expected_type: &'static str) -> Self {
        Self::ParamParse {
            param: param.into(),
            expected_type,
        }
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ListNotFound { .. } => 404,
            Self::ItemNotFound { .. } => 404,
            Self::ParamError { .. } => 400,
            Self::ParamParse { .. } => 400,
            Self::InvalidBody { .. } => 400,
            Self::Validation(_) => 422,
            Self::Database(_) => 500,
            Self::Internal { .. } => 500,
        }
    }
}

impl From<sea_orm::DbErr> for Error {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::Validation(ValidationErrors::from_validator(e))
    }
}
