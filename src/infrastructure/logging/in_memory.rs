use crate::core::errors::DirectoryError;
use crate::core::models::{
    audit::{AppLog, AuditAction},
    user::UserId,
};
use crate::infrastructure::logging::LoggingService;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryLogging {
    entries: Arc<RwLock<Vec<AppLog>>>,
}

impl InMemoryLogging {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoggingService for InMemoryLogging {
    async fn log_action(
        &self,
        action: AuditAction,
        details: serde_json::Value,
        user_id: Option<UserId>,
    ) -> Result<(), DirectoryError> {
        if !details.is_object() {
            return Err(DirectoryError::LoggingError(format!(
                "{} details must be a JSON object, got {}",
                action, details
            )));
        }
        info!(%action, ?user_id, "activity recorded");

        self.entries.write().await.push(AppLog {
            id: Uuid::new_v4().to_string(),
            action,
            user_id,
            details,
            timestamp: chrono::Utc::now(),
        });
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<AppLog>, DirectoryError> {
        Ok(self.entries.read().await.clone())
    }
}
