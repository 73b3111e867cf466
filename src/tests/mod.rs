mod storage_tests;

use crate::core::models::user::User;
use crate::core::services::DirectoryService;
use crate::infrastructure::logging::{LoggingService, in_memory::InMemoryLogging};
use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage, sqlite::SqliteStorage};

pub fn create_test_service() -> DirectoryService<InMemoryLogging, InMemoryStorage> {
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    DirectoryService::new(storage, logging)
}

pub async fn create_sqlite_test_service() -> DirectoryService<InMemoryLogging, SqliteStorage> {
    let storage = SqliteStorage::connect("sqlite::memory:").await.unwrap();
    let logging = InMemoryLogging::new();
    DirectoryService::new(storage, logging)
}

pub async fn add_user<L: LoggingService, S: Storage>(service: &DirectoryService<L, S>, name: &str, email: &str) -> User {
    service
        .create_user(Some(name.to_string()), Some(email.to_string()), Some("secret".to_string()))
        .await
        .unwrap()
}
