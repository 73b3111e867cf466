use crate::core::models::user::UserId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Directory mutations recorded in the activity log.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    UserCreated,
    UserDeleted,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AuditAction::UserCreated => "user_created",
            AuditAction::UserDeleted => "user_deleted",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AppLog {
    pub id: String,
    pub action: AuditAction,
    /// The user the action was applied to
    pub user_id: Option<UserId>,
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
