use serde::Serialize;
use thiserror::Error;

use crate::core::models::user::UserId;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn missing(field: &str) -> Self {
        FieldError {
            field: field.to_string(),
            title: format!("Missing {}", field),
            description: format!("{} is required", field),
        }
    }
}

#[derive(Error, Debug, Serialize)]
pub enum DirectoryError {
    /// Required create field absent or blank
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Body, path or query string could not be decoded
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Search query absent, empty or whitespace only
    #[error("Search content not entered")]
    EmptyQuery,

    /// Search query has no alphanumeric character
    #[error("Search query contains only symbols")]
    SymbolOnlyQuery,

    #[error("User {0} not found")]
    UserNotFound(UserId),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}

impl DirectoryError {
    /// True for failures of a collaborator rather than of the caller's input.
    pub fn is_internal(&self) -> bool {
        matches!(self, DirectoryError::StorageError(_) | DirectoryError::LoggingError(_))
    }
}

impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        DirectoryError::StorageError(err.to_string())
    }
}
