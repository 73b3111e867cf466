use crate::core::errors::DirectoryError;
use crate::core::models::{
    audit::{AppLog, AuditAction},
    user::{User, UserId},
};
use crate::core::search::{self, SearchOutcome};
use crate::core::validation::{validate_new_user, validate_query};
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use serde_json::json;
use tracing::{debug, info, warn};

pub struct DirectoryService<L: LoggingService, S: Storage> {
    storage: S,
    logging: L,
}

impl<L: LoggingService, S: Storage> DirectoryService<L, S> {
    pub fn new(storage: S, logging: L) -> Self {
        DirectoryService { storage, logging }
    }

    /// Records a mutation that has already been applied to the store.
    ///
    /// The mutation stands even if the activity log rejects the entry, so a
    /// logging failure is reported here and not returned to the caller.
    async fn record(&self, action: AuditAction, details: serde_json::Value, user_id: UserId) {
        if let Err(err) = self.logging.log_action(action, details, Some(user_id)).await {
            warn!("Failed to record {} for user {}: {}", action, user_id, err);
        }
    }

    pub async fn create_user(
        &self,
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<User, DirectoryError> {
        let new_user = validate_new_user(name, email, password)?;
        let id = self.storage.create_user(new_user.clone()).await?;
        let user = new_user.with_id(id);
        info!("Created user {}", user.id);

        self.record(
            AuditAction::UserCreated,
            json!({ "name": user.name, "email": user.email }),
            user.id,
        )
        .await;
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        let users = self.storage.list_users().await?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    /// Hard delete. A missing id is reported as `UserNotFound`.
    pub async fn delete_user(&self, user_id: UserId) -> Result<(), DirectoryError> {
        if !self.storage.delete_user(user_id).await? {
            warn!("Delete requested for unknown user {}", user_id);
            return Err(DirectoryError::UserNotFound(user_id));
        }
        info!("Deleted user {}", user_id);

        self.record(AuditAction::UserDeleted, json!({}), user_id).await;
        Ok(())
    }

    pub async fn search_users(&self, query: Option<&str>) -> Result<SearchOutcome, DirectoryError> {
        let query = validate_query(query)?;
        let outcome = search::search_users(&self.storage, query).await?;
        match &outcome {
            SearchOutcome::Matches(results) => debug!("Search {:?} matched {} users", query, results.len()),
            SearchOutcome::NoMatches => debug!("Search {:?} matched nothing", query),
        }
        Ok(outcome)
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, DirectoryError> {
        self.logging.get_logs().await
    }
}
