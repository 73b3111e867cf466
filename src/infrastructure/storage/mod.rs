pub mod in_memory;
pub mod sqlite;

use crate::core::errors::DirectoryError;
use crate::core::models::user::{NewUser, SearchField, User, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Persists a user and returns the id the store assigned to it.
    async fn create_user(&self, user: NewUser) -> Result<UserId, DirectoryError>;
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError>;
    /// Returns `false` when no user had the given id.
    async fn delete_user(&self, user_id: UserId) -> Result<bool, DirectoryError>;
    /// Users whose `field` contains `substring`, ignoring case.
    async fn find_by_substring(&self, field: SearchField, substring: &str) -> Result<Vec<User>, DirectoryError>;
}
