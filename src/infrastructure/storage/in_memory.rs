use crate::core::errors::DirectoryError;
use crate::core::models::user::{NewUser, SearchField, User, UserId};
use crate::core::search::contains_ignore_case;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct InMemoryStorage {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
    // Only ever incremented, so deleted ids are never handed out again.
    next_id: Arc<AtomicU64>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_user(&self, user: NewUser) -> Result<UserId, DirectoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.write().await;
        users.insert(id, user.with_id(id));
        Ok(id)
    }

    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<bool, DirectoryError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&user_id).is_some())
    }

    async fn find_by_substring(&self, field: SearchField, substring: &str) -> Result<Vec<User>, DirectoryError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .filter(|u| contains_ignore_case(field.value_of(u), substring))
            .cloned()
            .collect())
    }
}
