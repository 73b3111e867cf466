pub mod in_memory;

use crate::core::errors::DirectoryError;
use crate::core::models::{
    audit::{AppLog, AuditAction},
    user::UserId,
};
use async_trait::async_trait;

/// Append-only record of directory mutations.
#[async_trait]
pub trait LoggingService: Send + Sync {
    /// `details` must be a JSON object.
    async fn log_action(
        &self,
        action: AuditAction,
        details: serde_json::Value,
        user_id: Option<UserId>,
    ) -> Result<(), DirectoryError>;
    /// Entries in the order they were recorded.
    async fn get_logs(&self) -> Result<Vec<AppLog>, DirectoryError>;
}
